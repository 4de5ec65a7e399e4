use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{context::RequestContext, session::AuthSession},
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};
