use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub storage: StorageConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Admin API authentication. Non-GET entity endpoints require this token
/// as a bearer credential; GET endpoints stay public.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_api_token: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Image storage configuration.
///
/// When the S3-compatible cloud settings are present, uploads go to the
/// cloud bucket. Otherwise files land in `local_dir` and are served under
/// `local_public_base`.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub cloud: Option<CloudStorageConfig>,
    pub local_dir: String,
    pub local_public_base: String,
}

#[derive(Debug, Clone)]
pub struct CloudStorageConfig {
    pub endpoint: String,
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
    pub key_prefix: String,
}

/// OpenAI-compatible chat endpoint used for recommendation text.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            ai: AiConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        let admin_api_token = env::var("ADMIN_API_TOKEN")
            .map_err(|_| "ADMIN_API_TOKEN environment variable is required".to_string())?;

        if admin_api_token.trim().is_empty() {
            return Err("ADMIN_API_TOKEN must not be empty".to_string());
        }

        Ok(Self { admin_api_token })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Artistry Hub API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Artistry Hub".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let local_dir = env::var("STORAGE_LOCAL_DIR").unwrap_or_else(|_| "public".to_string());
        let local_public_base =
            env::var("STORAGE_LOCAL_PUBLIC_BASE").unwrap_or_else(|_| "/uploads".to_string());

        // Cloud storage only engages when the endpoint is configured.
        let cloud = match env::var("STORAGE_ENDPOINT") {
            Ok(endpoint) if !endpoint.is_empty() => {
                let public_endpoint =
                    env::var("STORAGE_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());
                let access_key = env::var("STORAGE_ACCESS_KEY")
                    .map_err(|_| "STORAGE_ACCESS_KEY is required with STORAGE_ENDPOINT")?;
                let secret_key = env::var("STORAGE_SECRET_KEY")
                    .map_err(|_| "STORAGE_SECRET_KEY is required with STORAGE_ENDPOINT")?;
                let bucket =
                    env::var("STORAGE_BUCKET").unwrap_or_else(|_| "artistry-hub".to_string());
                let region = env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".to_string());
                let key_prefix =
                    env::var("STORAGE_KEY_PREFIX").unwrap_or_else(|_| "uploads".to_string());

                Some(CloudStorageConfig {
                    endpoint,
                    public_endpoint,
                    access_key,
                    secret_key,
                    bucket,
                    region,
                    key_prefix,
                })
            }
            _ => None,
        };

        Ok(Self {
            cloud,
            local_dir,
            local_public_base,
        })
    }
}

impl AiConfig {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let api_key = env::var("AI_API_KEY").ok().filter(|s| !s.is_empty());

        let model = env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let request_timeout_secs = env::var("AI_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "AI_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            api_key,
            model,
            request_timeout_secs,
        })
    }
}
