use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ajaxlab_accounts::{OrderDraft, OrderStatus, RestOrder, RestUser, RestUserDraft};
use ajaxlab_core::{DomainError, DomainResult, ListQuery, PageRequest, RecordId, SortSpec};
use ajaxlab_members::{Member, NewMember};
use ajaxlab_todos::{Todo, TodoDraft};

// -------------------------
// Request DTOs
// -------------------------

/// Body of POST/PUT on todos. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

/// Body of POST/PUT on REST practice users.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub active: Option<bool>,
}

/// Body of POST on a user's orders. A client-sent `status` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub total_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Cart update parameters, from the query string or a urlencoded form.
///
/// Kept as strings so a malformed id reports the same error as a missing one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdateParams {
    pub product_id: Option<String>,
    pub new_qty: Option<String>,
}

impl CartUpdateParams {
    /// Fill fields missing here from `other`.
    pub fn or(self, other: CartUpdateParams) -> Self {
        Self {
            product_id: self.product_id.or(other.product_id),
            new_qty: self.new_qty.or(other.new_qty),
        }
    }

    pub fn product_id(&self) -> DomainResult<Option<RecordId>> {
        match self.product_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    pub fn new_qty(&self) -> DomainResult<i32> {
        let raw = self
            .new_qty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::invalid_argument("newQty is required"))?;
        raw.parse()
            .map_err(|_| DomainError::invalid_argument(format!("newQty must be an integer, got '{raw}'")))
    }
}

/// Query string of collection GETs.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Paging is on when any paging parameter is present, or when the
    /// resource pages by default (`default_size`).
    pub fn into_query(self, default_size: Option<u32>) -> DomainResult<ListQuery> {
        let sort = self
            .sort
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<SortSpec>)
            .transpose()?;

        let paged = default_size.is_some() || self.page.is_some() || self.size.is_some() || sort.is_some();

        let page = paged.then(|| PageRequest {
            page: self.page.unwrap_or(0),
            size: self.size.or(default_size).unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        });

        Ok(ListQuery {
            keyword: self.keyword,
            page,
        })
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardParams {
    pub user_id: Option<u64>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
}

/// Public member shape. Built field by field: nothing reaches the client
/// unless it is listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

/// A user together with the orders it owns. Orders point back by `userId`
/// only, never by embedding the user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub orders: Vec<OrderResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: RecordId,
    pub user_id: RecordId,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub username: String,
}

// -------------------------
// Mapping
// -------------------------

impl From<TodoRequest> for TodoDraft {
    fn from(req: TodoRequest) -> Self {
        TodoDraft::new(req.title, req.completed.unwrap_or(false))
    }
}

impl From<&Todo> for TodoResponse {
    fn from(t: &Todo) -> Self {
        Self {
            id: t.id,
            title: t.title.clone(),
            completed: t.completed,
        }
    }
}

impl From<MemberCreateRequest> for NewMember {
    fn from(req: MemberCreateRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
        }
    }
}

impl From<&Member> for MemberResponse {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id,
            username: m.username.clone(),
            email: m.email.clone(),
        }
    }
}

impl From<UserRequest> for RestUserDraft {
    fn from(req: UserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            active: req.active.unwrap_or(true),
        }
    }
}

impl UserResponse {
    pub fn new(u: &RestUser, orders: &[RestOrder]) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            active: u.active,
            orders: orders.iter().map(OrderResponse::from).collect(),
        }
    }
}

impl From<OrderRequest> for OrderDraft {
    fn from(req: OrderRequest) -> Self {
        Self {
            total_amount: req.total_amount,
        }
    }
}

impl From<&RestOrder> for OrderResponse {
    fn from(o: &RestOrder) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            total_amount: o.total_amount,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

/// Reject blank required text fields.
pub fn require_text(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::validation(format!("{field} cannot be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id: RecordId::new(7),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "Secret123".into(),
            phone_number: Some("0912-000-000".into()),
        }
    }

    #[test]
    fn member_response_has_exactly_the_public_fields() {
        let json = serde_json::to_value(MemberResponse::from(&member())).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "id", "username"]);

        let text = json.to_string();
        assert!(!text.contains("Secret123"));
        assert!(!text.contains("0912"));
    }

    #[test]
    fn create_request_carries_sensitive_fields_inward() {
        let req: MemberCreateRequest = serde_json::from_value(serde_json::json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "pw",
            "phoneNumber": "0900"
        }))
        .unwrap();
        let new = NewMember::from(req);
        assert_eq!(new.password, "pw");
        assert_eq!(new.phone_number.as_deref(), Some("0900"));
    }

    #[test]
    fn user_request_defaults_active() {
        let req: UserRequest =
            serde_json::from_value(serde_json::json!({"name": "a", "email": "e"})).unwrap();
        assert!(RestUserDraft::from(req).active);
    }

    #[test]
    fn user_response_embeds_orders_without_the_user() {
        let user = RestUser {
            id: RecordId::new(3),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            active: true,
        };
        let order = RestOrder::place(user.id, OrderDraft { total_amount: 12.5 }, Utc::now());

        let json = serde_json::to_value(UserResponse::new(&user, &[order])).unwrap();
        let orders = json["orders"].as_array().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0]["userId"], 3);
        assert_eq!(orders[0]["totalAmount"], 12.5);
        assert!(orders[0].get("user").is_none());

        let json = serde_json::to_value(UserResponse::new(&user, &[])).unwrap();
        assert_eq!(json["orders"], serde_json::json!([]));
    }

    #[test]
    fn list_params_unpaged_by_default_for_plain_resources() {
        let q = ListParams::default().into_query(None).unwrap();
        assert!(q.page.is_none());
    }

    #[test]
    fn list_params_default_paging() {
        let q = ListParams::default().into_query(Some(10)).unwrap();
        assert_eq!(q.page, Some(PageRequest::new(0, 10)));

        let q = ListParams {
            page: Some(2),
            ..Default::default()
        }
        .into_query(None)
        .unwrap();
        assert_eq!(q.page, Some(PageRequest::new(2, DEFAULT_PAGE_SIZE)));
    }

    #[test]
    fn list_params_bad_sort() {
        let err = ListParams {
            sort: Some("name,up".into()),
            ..Default::default()
        }
        .into_query(None)
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn cart_params_merge_and_parse() {
        let query = CartUpdateParams {
            product_id: Some("3".into()),
            new_qty: None,
        };
        let form = CartUpdateParams {
            product_id: Some("9".into()),
            new_qty: Some("5".into()),
        };
        let merged = query.or(form);
        assert_eq!(merged.product_id().unwrap(), Some(RecordId::new(3)));
        assert_eq!(merged.new_qty().unwrap(), 5);

        let empty = CartUpdateParams::default();
        assert_eq!(empty.product_id().unwrap(), None);
        assert!(empty.new_qty().is_err());

        let bad = CartUpdateParams {
            product_id: Some("x".into()),
            new_qty: Some("1".into()),
        };
        assert!(matches!(bad.product_id(), Err(DomainError::InvalidArgument(_))));
    }
}
