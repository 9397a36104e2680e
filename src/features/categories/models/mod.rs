mod category;

pub use category::{
    ArtPieceRecord, BespokeCreation, BlogPostTeaser, CategoryDocument, CommitmentItem, FaqEntry,
    ProcessStep, TestimonialRecord,
};
