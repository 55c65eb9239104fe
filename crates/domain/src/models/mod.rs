//! Domain model definitions.

pub mod blog;
pub mod dashboard;
pub mod lead;
pub mod property;
pub mod user;

pub use blog::{BlogCategory, BlogComment, BlogPost, BlogPostFilter, BlogPostInput};
pub use dashboard::DashboardStats;
pub use lead::{
    ContactMessage, MessageStatusFilter, NewContactMessage, NewPropertyInquiry,
    NewsletterSubscriber, PropertyInquiry,
};
pub use property::{Property, PropertyFilter, PropertyInput};
pub use user::{User, UserRole};
