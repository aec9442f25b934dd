use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub name: String,
    pub member_count: i64,
    pub welcome_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub welcome_text: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::queue::Entity")]
    Queue,
    #[sea_orm(has_many = "super::queue_session::Entity")]
    QueueSession,
    #[sea_orm(has_many = "super::guild_role::Entity")]
    GuildRole,
    #[sea_orm(has_many = "super::guild_token::Entity")]
    GuildToken,
}

impl Related<super::queue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Queue.def()
    }
}

impl Related<super::queue_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QueueSession.def()
    }
}

impl Related<super::guild_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildRole.def()
    }
}

impl Related<super::guild_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
