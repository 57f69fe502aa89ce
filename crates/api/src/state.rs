use catalog::ProductService;
use catalog_auth::AuthService;

/// Application state shared across all handlers.
pub struct AppState {
    pub auth: AuthService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(auth: AuthService, products: ProductService) -> Self {
        Self { auth, products }
    }
}
