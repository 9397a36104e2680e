pub mod art_pieces;
pub mod auth;
pub mod bookings;
pub mod categories;
pub mod clients;
pub mod faqs;
pub mod gallery;
pub mod recommendations;
pub mod testimonials;
pub mod workshops;
