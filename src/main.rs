use std::sync::Arc;

use bkmarket::application::catalog::Catalog;
use bkmarket::application::chat::ChatInbox;
use bkmarket::application::orders::OrderBoard;
use bkmarket::domain::ports::UsersApi;
use bkmarket::{Config, RestMarketApi, StubAuth};

/// One synchronization pass against the live backend: categories, the
/// newest listings, order counts and the chat list, logged as a summary.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let auth = match &config.token {
        Some(token) => StubAuth::with_token(token),
        None => StubAuth::test_session(),
    };
    let api = Arc::new(RestMarketApi::new(&config, Arc::new(auth))?);

    log::info!("Syncing against {}", config.base_url);

    let catalog = Catalog::new(Arc::clone(&api));
    let categories = catalog.categories().await?;
    log::info!("{} categories", categories.len());

    let latest = catalog.latest(4).await?;
    for product in &latest {
        log::info!("latest: #{} {} ({})", product.id, product.title, product.price);
    }

    let mut board = OrderBoard::new(Arc::clone(&api));
    board.refresh().await?;
    let counts = board.counts();
    log::info!(
        "orders: {} requested, {} meeting, {} completed, {} cancelled",
        counts.requested,
        counts.meeting,
        counts.completed,
        counts.cancelled
    );

    let me = api.me().await?;
    let mut inbox = ChatInbox::new(Arc::clone(&api), me.id);
    inbox.refresh().await?;
    log::info!("{} chats, {} unread", inbox.chats().len(), inbox.unread_chats());

    Ok(())
}
