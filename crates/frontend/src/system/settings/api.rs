//! Admin settings and account API

use crate::shared::api_utils::{get_json, put_json};
use contracts::domain::common::ActionError;
use contracts::system::settings::{
    AdminInfo, AdminInfoResponse, AdminSettings, SettingsResponse, UpdateBankRequest,
    UpdateEmailRequest, UpdateStoreRequest,
};

pub async fn fetch_settings() -> Result<AdminSettings, ActionError> {
    let resp: SettingsResponse = get_json("/admin/settings").await?;
    Ok(resp.into_settings())
}

/// `None` when the backend answers without a `user` object
pub async fn fetch_admin() -> Result<Option<AdminInfo>, ActionError> {
    let resp: AdminInfoResponse = get_json("/admin/me").await?;
    Ok(resp.user)
}

pub async fn update_email(req: &UpdateEmailRequest) -> Result<(), ActionError> {
    put_json("/admin/email", req).await
}

pub async fn update_store(req: &UpdateStoreRequest) -> Result<(), ActionError> {
    put_json("/admin/settings/store", req).await
}

pub async fn update_bank(req: &UpdateBankRequest) -> Result<(), ActionError> {
    put_json("/admin/settings/bank", req).await
}
