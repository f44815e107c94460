//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod bookmark;
pub mod user;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use bookmark::{
    ActiveModel as BookmarkActiveModel, Entity as BookmarkEntity, Model as BookmarkModel,
};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
