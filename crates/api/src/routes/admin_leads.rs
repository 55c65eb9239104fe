//! Admin lead management: contact messages and property inquiries,
//! including bulk read-state changes and bulk deletion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{ContactMessage, MessageStatusFilter, PropertyInquiry};
use persistence::repositories::{ContactMessageRepository, PropertyInquiryRepository};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the contact message list.
#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    /// Case-insensitive substring match on name, email, or message body.
    pub search: Option<String>,
    /// Read-state filter; defaults to all messages.
    pub status: Option<MessageStatusFilter>,
}

/// Identifiers for a bulk operation.
#[derive(Debug, Deserialize)]
pub struct BulkIds {
    pub ids: Vec<Uuid>,
}

/// Result of a bulk operation: how many rows were actually touched.
#[derive(Debug, Serialize)]
pub struct BulkResult {
    pub affected: u64,
}

/// List contact messages, optionally filtered by search text and
/// read state, newest first.
///
/// GET /api/v1/admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let read = query.status.unwrap_or_default().as_read_flag();
    let messages = ContactMessageRepository::new(state.pool.clone())
        .list(query.search.as_deref(), read)
        .await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Mark a contact message as read. Idempotent.
///
/// POST /api/v1/admin/messages/{id}/read
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactMessage>, ApiError> {
    set_message_read(&state, id, true).await
}

/// Mark a contact message as unread. Idempotent.
///
/// POST /api/v1/admin/messages/{id}/unread
pub async fn mark_message_unread(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactMessage>, ApiError> {
    set_message_read(&state, id, false).await
}

async fn set_message_read(
    state: &AppState,
    id: Uuid,
    read: bool,
) -> Result<Json<ContactMessage>, ApiError> {
    let message = ContactMessageRepository::new(state.pool.clone())
        .set_read(id, read)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact message not found".to_string()))?;
    Ok(Json(message.into()))
}

/// Delete a contact message by id.
///
/// DELETE /api/v1/admin/messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = ContactMessageRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Contact message not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a batch of contact messages as read. Unknown ids are skipped;
/// `affected` reports the rows actually updated.
///
/// POST /api/v1/admin/messages/bulk/read
pub async fn bulk_mark_read(
    State(state): State<AppState>,
    Json(payload): Json<BulkIds>,
) -> Result<Json<BulkResult>, ApiError> {
    let affected = ContactMessageRepository::new(state.pool.clone())
        .bulk_set_read(&payload.ids, true)
        .await?;
    Ok(Json(BulkResult { affected }))
}

/// Mark a batch of contact messages as unread.
///
/// POST /api/v1/admin/messages/bulk/unread
pub async fn bulk_mark_unread(
    State(state): State<AppState>,
    Json(payload): Json<BulkIds>,
) -> Result<Json<BulkResult>, ApiError> {
    let affected = ContactMessageRepository::new(state.pool.clone())
        .bulk_set_read(&payload.ids, false)
        .await?;
    Ok(Json(BulkResult { affected }))
}

/// Delete a batch of contact messages.
///
/// POST /api/v1/admin/messages/bulk/delete
pub async fn bulk_delete_messages(
    State(state): State<AppState>,
    Json(payload): Json<BulkIds>,
) -> Result<Json<BulkResult>, ApiError> {
    let affected = ContactMessageRepository::new(state.pool.clone())
        .bulk_delete(&payload.ids)
        .await?;
    Ok(Json(BulkResult { affected }))
}

/// List property inquiries with their property titles, newest first.
///
/// GET /api/v1/admin/inquiries
pub async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyInquiry>>, ApiError> {
    let inquiries = PropertyInquiryRepository::new(state.pool.clone())
        .list()
        .await?;
    Ok(Json(inquiries.into_iter().map(Into::into).collect()))
}

/// Delete a property inquiry by id.
///
/// DELETE /api/v1/admin/inquiries/{id}
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = PropertyInquiryRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Property inquiry not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a batch of property inquiries.
///
/// POST /api/v1/admin/inquiries/bulk/delete
pub async fn bulk_delete_inquiries(
    State(state): State<AppState>,
    Json(payload): Json<BulkIds>,
) -> Result<Json<BulkResult>, ApiError> {
    let affected = PropertyInquiryRepository::new(state.pool.clone())
        .bulk_delete(&payload.ids)
        .await?;
    Ok(Json(BulkResult { affected }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_query_defaults_to_all() {
        let query = MessageListQuery::default();
        assert_eq!(query.status.unwrap_or_default().as_read_flag(), None);
    }

    #[test]
    fn test_status_filter_maps_to_read_flag() {
        assert_eq!(MessageStatusFilter::Read.as_read_flag(), Some(true));
        assert_eq!(MessageStatusFilter::Unread.as_read_flag(), Some(false));
        assert_eq!(MessageStatusFilter::All.as_read_flag(), None);
    }

    #[test]
    fn test_bulk_ids_deserializes() {
        let payload: BulkIds = serde_json::from_value(serde_json::json!({
            "ids": ["7f8c6e1a-1111-4222-8333-444455556666"]
        }))
        .unwrap();
        assert_eq!(payload.ids.len(), 1);
    }
}
