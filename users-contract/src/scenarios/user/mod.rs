mod user_create_invalid_scenario;
mod user_create_scenario;
mod user_delete_missing_scenario;
mod user_delete_scenario;
mod user_get_scenario;
mod user_list_scenario;
mod user_patch_scenario;
mod user_update_scenario;

pub use user_create_invalid_scenario::UserCreateInvalidScenario;
pub use user_create_scenario::UserCreateScenario;
pub use user_delete_missing_scenario::UserDeleteMissingScenario;
pub use user_delete_scenario::UserDeleteScenario;
pub use user_get_scenario::UserGetScenario;
pub use user_list_scenario::UserListScenario;
pub use user_patch_scenario::UserPatchScenario;
pub use user_update_scenario::UserUpdateScenario;
