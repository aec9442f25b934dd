use crate::error::{token::TokenError, AppError};
use crate::model::{
    role::RoleKind,
    token::{CreateTokenParam, TokenKind},
};
use crate::service::token::{TokenService, MAX_TOKEN_USES, TOKEN_CODE_LENGTH};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod redeem;
