use uuid::Uuid;

pub fn menu_key(user_id: Uuid) -> String {
    format!("menu_{}", user_id)
}

pub fn preferences_key(user_id: Uuid) -> String {
    format!("preferences_{}", user_id)
}
