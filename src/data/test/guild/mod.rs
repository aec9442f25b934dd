use crate::data::guild::DiscordGuildRepository;
use crate::model::guild::UpsertGuildParam;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, serenity::create_test_guild};

mod delete;
mod update_welcome;
mod upsert;
