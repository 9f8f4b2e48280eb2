use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use emporia_auth_types::session::JwtSecret;

use crate::infra::db::{
    DbBrandRepository, DbCartRepository, DbCategoryRepository, DbColorRepository,
    DbProductRepository, DbSizeRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn brand_repo(&self) -> DbBrandRepository {
        DbBrandRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn color_repo(&self) -> DbColorRepository {
        DbColorRepository {
            db: self.db.clone(),
        }
    }

    pub fn size_repo(&self) -> DbSizeRepository {
        DbSizeRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
