use chrono::{DateTime, Utc};
use clap::Subcommand;
use gympass_application::use_cases::{
    CheckInRequest, FetchNearbyGymsRequest, FetchUserCheckInsHistoryRequest,
    GetUserMetricsRequest, SearchGymsRequest,
};
use gympass_domain::NewGym;
use serde_json::{json, Value};

use crate::di::UseCases;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a gym
    CreateGym {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },

    /// Search gyms by title
    SearchGyms {
        query: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List gyms near a location
    NearbyGyms {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },

    /// Check a user in at a gym
    CheckIn {
        #[arg(long)]
        gym_id: String,

        #[arg(long)]
        user_id: String,

        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        /// RFC 3339 timestamp to check in at (default: now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// List a user's check-ins, oldest first
    History {
        user_id: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Count a user's check-ins
    Metrics { user_id: String },
}

pub async fn run(command: Command, use_cases: &UseCases) -> anyhow::Result<Value> {
    match command {
        Command::CreateGym {
            title,
            description,
            phone,
            latitude,
            longitude,
        } => {
            let response = use_cases
                .create_gym
                .execute(NewGym {
                    title,
                    description,
                    phone,
                    latitude,
                    longitude,
                })
                .await?;
            Ok(json!({ "gym": response.gym }))
        }

        Command::SearchGyms { query, page } => {
            let response = use_cases
                .search_gyms
                .execute(SearchGymsRequest { query, page })
                .await?;
            Ok(json!({ "gyms": response.gyms }))
        }

        Command::NearbyGyms {
            latitude,
            longitude,
        } => {
            let response = use_cases
                .fetch_nearby_gyms
                .execute(FetchNearbyGymsRequest {
                    user_latitude: latitude,
                    user_longitude: longitude,
                })
                .await?;
            Ok(json!({ "gyms": response.gyms }))
        }

        Command::CheckIn {
            gym_id,
            user_id,
            latitude,
            longitude,
            at,
        } => {
            let response = use_cases
                .check_in
                .execute(CheckInRequest {
                    gym_id,
                    user_id,
                    user_latitude: latitude,
                    user_longitude: longitude,
                    now: at.unwrap_or_else(Utc::now),
                })
                .await?;
            Ok(json!({ "check_in": response.check_in }))
        }

        Command::History { user_id, page } => {
            let response = use_cases
                .fetch_history
                .execute(FetchUserCheckInsHistoryRequest { user_id, page })
                .await?;
            Ok(json!({ "check_ins": response.check_ins }))
        }

        Command::Metrics { user_id } => {
            let response = use_cases
                .get_metrics
                .execute(GetUserMetricsRequest { user_id })
                .await?;
            Ok(json!({ "check_ins_count": response.check_ins_count }))
        }
    }
}
