pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}
