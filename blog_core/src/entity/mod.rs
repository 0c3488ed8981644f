// SeaORM entities
// One module per table; the migrations in `models::migrator` create the
// matching schema.

pub mod comment;
pub mod post;
pub mod user;


pub mod prelude {
    pub use super::comment::{
        ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as Comment,
        Model as CommentModel,
    };
    pub use super::post::{
        ActiveModel as PostActiveModel, Column as PostColumn, Entity as Post,
        Model as PostModel,
    };
    pub use super::user::{
        ActiveModel as UserActiveModel, Column as UserColumn, Entity as User,
        Model as UserModel,
    };

    pub use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, Database,
        DatabaseConnection, DatabaseTransaction, DbConn, DbErr, EntityTrait, ModelTrait, NotSet,
        PaginatorTrait, QueryFilter, QueryOrder, Related, Set, TransactionTrait,
    };
}
