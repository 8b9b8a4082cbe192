pub mod admins;
pub mod cards;
pub mod categories;
pub mod game_categories;
pub mod game_sets;
pub mod games;
pub mod hosts;
pub mod set_cards;
pub mod sets;

pub use admins::Entity as Admins;
pub use admins::Model as Admin;
pub use cards::Entity as Cards;
pub use cards::Model as Card;
pub use categories::Entity as Categories;
pub use categories::Model as Category;
pub use game_categories::Entity as GameCategories;
pub use game_sets::Entity as GameSets;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use hosts::Entity as Hosts;
pub use hosts::Model as Host;
pub use set_cards::Entity as SetCards;
pub use sets::Entity as Sets;
pub use sets::Model as Set;
