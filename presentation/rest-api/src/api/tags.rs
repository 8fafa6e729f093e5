use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness
    Health,
    /// API operations related to products
    Products,
}
