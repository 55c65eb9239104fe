//! Database entity definitions (row mappings).

mod blog;
mod lead;
mod property;
mod user;

pub use blog::{BlogCategoryEntity, BlogCommentEntity, BlogPostEntity};
pub use lead::{ContactMessageEntity, NewsletterSubscriberEntity, PropertyInquiryEntity};
pub use property::PropertyEntity;
pub use user::{UserEntity, UserSessionEntity};
