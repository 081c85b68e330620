use chefinbox_core::domain::common::{ChefInBoxConfig, LLMConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "chefinbox-api", about = "ChefInBox recipe suggestion API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address the HTTP server binds to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Origins allowed by CORS
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    /// Gemini API credential
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Model used for structured recipe text
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-3-flash-preview")]
    pub gemini_model: String,

    /// Model used for dish photos
    #[arg(
        long,
        env = "GEMINI_IMAGE_MODEL",
        default_value = "gemini-2.5-flash-image"
    )]
    pub gemini_image_model: String,
}

impl From<Args> for ChefInBoxConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_image_model: args.llm.gemini_image_model,
            },
        }
    }
}
