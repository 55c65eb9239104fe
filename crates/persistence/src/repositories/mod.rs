//! Repository implementations, one per entity.

mod blog_category;
mod blog_comment;
mod blog_post;
mod contact_message;
mod dashboard;
mod newsletter;
mod property;
mod property_inquiry;
mod session;
mod user;

pub use blog_category::BlogCategoryRepository;
pub use blog_comment::BlogCommentRepository;
pub use blog_post::BlogPostRepository;
pub use contact_message::ContactMessageRepository;
pub use dashboard::DashboardRepository;
pub use newsletter::NewsletterRepository;
pub use property::PropertyRepository;
pub use property_inquiry::PropertyInquiryRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
