//! Store, bank and admin account settings

use crate::domain::common::wire::null_as_default;
use crate::domain::common::ValidationError;
use serde::{Deserialize, Serialize};

/// Public store profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Account buyers transfer payments to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub bank_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sort_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub store_info: StoreInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub bank_info: BankInfo,
}

/// `GET /admin/settings`; newer backends wrap the payload in `data`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsResponse {
    pub data: Option<AdminSettings>,
    pub settings: Option<AdminSettings>,
}

impl SettingsResponse {
    pub fn into_settings(self) -> AdminSettings {
        self.data.or(self.settings).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
}

/// `GET /admin/me`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminInfoResponse {
    pub user: Option<AdminInfo>,
}

/// Body of `PUT /admin/email`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateEmailRequest {
    pub email: String,
    pub password: String,
}

impl UpdateEmailRequest {
    /// The current password is mandatory for an email change
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Body of `PUT /admin/settings/store`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    pub store_name: String,
    pub store_description: String,
    pub store_address: String,
    pub store_phone: String,
    pub store_email: String,
}

impl From<&StoreInfo> for UpdateStoreRequest {
    fn from(info: &StoreInfo) -> Self {
        Self {
            store_name: info.name.clone(),
            store_description: info.description.clone(),
            store_address: info.address.clone(),
            store_phone: info.phone.clone(),
            store_email: info.email.clone(),
        }
    }
}

/// Body of `PUT /admin/settings/bank`
pub type UpdateBankRequest = BankInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_prefers_data() {
        let resp: SettingsResponse = serde_json::from_value(json!({
            "data": { "storeInfo": { "name": "New" } },
            "settings": { "storeInfo": { "name": "Old" } }
        }))
        .unwrap();
        assert_eq!(resp.into_settings().store_info.name, "New");

        let resp: SettingsResponse = serde_json::from_value(json!({
            "settings": { "bankInfo": { "bankName": "First Bank", "sortCode": null } }
        }))
        .unwrap();
        let settings = resp.into_settings();
        assert_eq!(settings.bank_info.bank_name, "First Bank");
        assert_eq!(settings.bank_info.sort_code, "");
        assert_eq!(settings.store_info, StoreInfo::default());

        let resp: SettingsResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resp.into_settings(), AdminSettings::default());
    }

    #[test]
    fn test_email_request_validation() {
        assert_eq!(
            UpdateEmailRequest::new("admin@example.com", ""),
            Err(ValidationError::PasswordRequired)
        );
        assert_eq!(
            UpdateEmailRequest::new("  ", "secret"),
            Err(ValidationError::EmptyEmail)
        );
        let req = UpdateEmailRequest::new(" admin@example.com ", "secret").unwrap();
        assert_eq!(req.email, "admin@example.com");
    }

    #[test]
    fn test_store_request_field_names() {
        let info = StoreInfo {
            name: "Corner Shop".into(),
            email: "shop@example.com".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(UpdateStoreRequest::from(&info)).unwrap();
        assert_eq!(body["storeName"], "Corner Shop");
        assert_eq!(body["storeEmail"], "shop@example.com");
        assert_eq!(body["storeDescription"], "");
    }
}
