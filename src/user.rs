/// User and assigned roles.
pub struct User {
    /// User name.
    pub user: String,

    /// List of assigned roles.
    pub roles: Vec<String>,
}
