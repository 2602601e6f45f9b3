mod bookmark;
mod follow;
mod message;
mod reaction;
mod tuit;
mod user;

pub use bookmark::Bookmark;
pub use follow::Follow;
pub use message::{Message, SendMessage};
pub use reaction::{Dislike, Like, ReactionRecord};
pub use tuit::{CreateTuit, Tuit, TuitStats};
pub use user::{CreateUser, LoginRequest, LoginResponse, User};
