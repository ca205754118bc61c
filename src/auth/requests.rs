use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityRequestBody {
    /// Alpha-3 code chosen on the login form, e.g. `GBR`.
    #[serde(default)]
    pub country: Option<String>,
}
