use crate::{data::booking::BookingRepository, model::booking::CreateBookingParams};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete_expired;
mod create;
mod get_all_filtered;
mod get_for_user;
mod update_status;
