pub use super::car::Entity as Car;
pub use super::car_at_show::Entity as CarAtShow;
pub use super::owner::Entity as Owner;
pub use super::show_ground::Entity as ShowGround;
