use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Products,
    /// Back-office reporting
    Admin,
    /// Ad-hoc catalog queries
    Diagnostics,
}
