use crate::UserSettings;

use uuid::Uuid;

#[test]
fn test_user_settings_new() {
    let owner_id = Uuid::new_v4();
    let settings = UserSettings::new(owner_id, "America/Phoenix".to_string());

    assert_eq!(settings.owner_id, owner_id);
    assert_eq!(settings.time_zone, "America/Phoenix");
    assert_eq!(settings.created_at, settings.updated_at);
}
