use std::sync::Arc;

use ajaxlab_accounts::AccountService;
use ajaxlab_auth::{Authenticator, Hs256TokenService, StaticCredentials};
use ajaxlab_cart::CartService;
use ajaxlab_catalog::TodoBoard;
use ajaxlab_core::CrudService;
use ajaxlab_infra::{InMemoryStore, StoreCrud};
use ajaxlab_members::MemberService;
use ajaxlab_todos::{Todo, seed_todos};

use crate::config::ApiConfig;

/// Everything the handlers share, wired once per app instance.
pub struct AppServices {
    pub cart: CartService,
    pub todos: Arc<dyn CrudService<Todo>>,
    pub board: TodoBoard,
    pub members: MemberService,
    pub accounts: Arc<AccountService>,
    pub auth: Authenticator,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let cart = CartService::new(Arc::new(InMemoryStore::new()));
    cart.seed_if_empty();

    let members = MemberService::new(Arc::new(InMemoryStore::new()));
    members.seed_if_empty();

    let todos: Arc<dyn CrudService<Todo>> = Arc::new(StoreCrud::new(Arc::new(seed_todos())));

    let accounts = Arc::new(AccountService::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(InMemoryStore::new()),
    ));

    let tokens = Arc::new(Hs256TokenService::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));
    let auth = Authenticator::new(StaticCredentials::demo(), tokens);

    tracing::info!("services wired");

    AppServices {
        cart,
        todos,
        board: TodoBoard::demo(),
        members,
        accounts,
        auth,
    }
}
