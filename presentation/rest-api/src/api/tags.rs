use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Categories,
    Brands,
    Sectors,
    Products,
    Bins,
    Users,
}
