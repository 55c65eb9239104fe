//! Admin dashboard summary model.

use serde::{Deserialize, Serialize};

/// Entity counts shown on the admin dashboard landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub blog_posts: i64,
    pub properties: i64,
    pub contact_messages: i64,
    pub unread_messages: i64,
    pub property_inquiries: i64,
    pub newsletter_subscribers: i64,
}
