use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser};
use url::Url;
use weekfit_core::domain::common::{
    AiConfig, AuthConfig, DatabaseConfig, FallbackConfig, WeekFitConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "weekfit-api", version, about = "WeekFit HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub ai: AiArgs,

    #[command(flatten)]
    pub fallback: FallbackArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert", env = "TLS_CERT_PATH")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "TLS_KEY_PATH")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "weekfit")]
    pub name: String,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// Secret the hosted auth provider signs access tokens with.
    #[arg(long = "jwt-secret", env = "HOSTED_JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(long = "jwt-audience", env = "HOSTED_JWT_AUDIENCE")]
    pub audience: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AiArgs {
    #[arg(long = "ai-api-key", env = "AI_GATEWAY_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long = "ai-base-url",
        env = "AI_GATEWAY_URL",
        default_value = "https://ai.gateway.lovable.dev/v1"
    )]
    pub base_url: Url,

    #[arg(long = "ai-model", env = "AI_GATEWAY_MODEL", default_value = "google/gemini-2.5-flash")]
    pub model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct FallbackArgs {
    /// Where menus and preferences are kept while backend tables are missing.
    #[arg(long = "fallback-dir", env = "FALLBACK_DIRECTORY", default_value = "./data/fallback")]
    pub directory: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for WeekFitConfig {
    fn from(args: Args) -> Self {
        WeekFitConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                run_migrations: args.db.run_migrations,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                audience: args.auth.audience,
            },
            ai: AiConfig {
                api_key: args.ai.api_key,
                base_url: args.ai.base_url.to_string(),
                model: args.ai.model,
            },
            fallback: FallbackConfig {
                directory: args.fallback.directory,
            },
        }
    }
}
