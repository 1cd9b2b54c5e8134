//! Health Hub API server.
//!
//! Loads `HEALTH_HUB__*` configuration, wires adapters to ports and serves
//! the REST API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use health_hub::adapters::ai::{CannedResponseProvider, OpenAIConfig, OpenAIProvider};
use health_hub::adapters::auth::{SupabaseAuthConfig, SupabaseSessionValidator};
use health_hub::adapters::http::{app, AppState};
use health_hub::adapters::memory::{InMemoryCartStore, InMemoryRecordStore};
use health_hub::adapters::postgres::{
    PostgresBpEstimateRepository, PostgresChatMessageRepository, PostgresMealPlanRepository,
    PostgresProfileReader, PostgresTipReader,
};
use health_hub::adapters::speech::{
    DisabledSpeechSynthesizer, ElevenLabsConfig, ElevenLabsSynthesizer,
};
use health_hub::application::ChatHandlerConfig;
use health_hub::config::{AiConfig, AiProvider, AppConfig, DatabaseConfig, SpeechConfig};
use health_hub::ports::{
    AIProvider, BpEstimateRepository, ChatMessageRepository, MealPlanRepository, ProfileReader,
    SpeechSynthesizer, TipReader,
};

type BoxError = Box<dyn std::error::Error>;

/// Record-store ports, backed by one implementation.
struct RecordStores {
    profiles: Arc<dyn ProfileReader>,
    tips: Arc<dyn TipReader>,
    meal_plans: Arc<dyn MealPlanRepository>,
    chat_messages: Arc<dyn ChatMessageRepository>,
    bp_estimates: Arc<dyn BpEstimateRepository>,
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn postgres_stores(database: &DatabaseConfig) -> Result<RecordStores, BoxError> {
    tracing::info!(host = database.redacted_host(), "Connecting to Postgres");
    let pool = database.pool_options().connect(&database.url).await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    Ok(RecordStores {
        profiles: Arc::new(PostgresProfileReader::new(pool.clone())),
        tips: Arc::new(PostgresTipReader::new(pool.clone())),
        meal_plans: Arc::new(PostgresMealPlanRepository::new(pool.clone())),
        chat_messages: Arc::new(PostgresChatMessageRepository::new(pool.clone())),
        bp_estimates: Arc::new(PostgresBpEstimateRepository::new(pool)),
    })
}

fn memory_stores() -> RecordStores {
    tracing::warn!("No database configured, records are kept in memory");
    let store = Arc::new(InMemoryRecordStore::new());
    RecordStores {
        profiles: store.clone(),
        tips: store.clone(),
        meal_plans: store.clone(),
        chat_messages: store.clone(),
        bp_estimates: store,
    }
}

fn ai_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, BoxError> {
    match (ai.provider, ai.openai_api_key.as_deref()) {
        (AiProvider::OpenAI, Some(key)) => {
            let config = OpenAIConfig::new(key)
                .with_model(&ai.model)
                .with_base_url(&ai.base_url)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            tracing::info!(model = %ai.model, "Using OpenAI chat provider");
            Ok(Arc::new(OpenAIProvider::new(config)?))
        }
        (AiProvider::OpenAI, None) => Err("AI__OPENAI_API_KEY is required for the openai provider".into()),
        (AiProvider::Canned, _) => {
            tracing::info!("Using canned chat replies");
            Ok(Arc::new(CannedResponseProvider::new()))
        }
    }
}

fn speech_synthesizer(speech: &SpeechConfig) -> Result<Arc<dyn SpeechSynthesizer>, BoxError> {
    match (speech.enabled, speech.elevenlabs_api_key.as_deref()) {
        (true, Some(key)) => {
            let config = ElevenLabsConfig::new(key, &speech.voice_id)
                .with_model(&speech.model_id)
                .with_base_url(&speech.base_url)
                .with_timeout(speech.timeout());
            tracing::info!(voice_id = %speech.voice_id, "Speech synthesis enabled");
            Ok(Arc::new(ElevenLabsSynthesizer::new(config)?))
        }
        _ => {
            tracing::info!("Speech synthesis disabled");
            Ok(Arc::new(DisabledSpeechSynthesizer))
        }
    }
}

fn chat_config(ai: &AiConfig) -> ChatHandlerConfig {
    let defaults = ChatHandlerConfig::default();
    ChatHandlerConfig {
        system_prompt: ai.system_prompt.clone().unwrap_or(defaults.system_prompt),
        max_tokens: ai.max_tokens,
        ..defaults
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let stores = match &config.database {
        Some(database) => postgres_stores(database).await?,
        None => memory_stores(),
    };

    let validator = SupabaseSessionValidator::new(
        SupabaseAuthConfig::new(&config.auth.supabase_url, &config.auth.jwt_secret)
            .with_audience(&config.auth.audience)
            .with_leeway(config.auth.leeway_secs),
    );

    let state = AppState {
        session_validator: Arc::new(validator),
        profiles: stores.profiles,
        tips: stores.tips,
        meal_plans: stores.meal_plans,
        chat_messages: stores.chat_messages,
        bp_estimates: stores.bp_estimates,
        carts: Arc::new(InMemoryCartStore::new()),
        ai_provider: ai_provider(&config.ai)?,
        speech: speech_synthesizer(&config.speech)?,
        chat_config: chat_config(&config.ai),
    };

    let addr = config.server.socket_addr()?;
    let router = app(state, &config.server);

    tracing::info!(%addr, environment = ?config.server.environment, "Health Hub listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
