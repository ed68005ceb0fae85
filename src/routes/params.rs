use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::OrderStatus;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemQuery {
    pub category_id: Option<Uuid>,
    /// Matched against both the Arabic and English names.
    pub q: Option<String>,
    pub featured: Option<bool>,
}

/// Pagination fields are inline; the query-string deserializer cannot parse
/// numbers through `#[serde(flatten)]`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<OrderStatus>,
}

impl OrderListQuery {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::*;

    #[test]
    fn paginated_order_list_query_deserializes() {
        let uri: Uri = "/api/admin/orders?page=2&per_page=10&status=ready"
            .parse()
            .unwrap();
        let Query(query) = Query::<OrderListQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.per_page, Some(10));
        assert_eq!(query.status, Some(OrderStatus::Ready));
        assert_eq!(query.normalize(), (2, 10, 10));
    }

    #[test]
    fn status_filter_alone_deserializes() {
        let uri: Uri = "/api/admin/orders?status=driver_arrived".parse().unwrap();
        let Query(query) = Query::<OrderListQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.status, Some(OrderStatus::DriverArrived));
        assert_eq!(query.normalize(), (1, 20, 0));
    }

    #[test]
    fn normalize_clamps_out_of_range_values() {
        let query = OrderListQuery {
            page: Some(0),
            per_page: Some(1000),
            status: None,
        };
        assert_eq!(query.normalize(), (1, 100, 0));
    }
}
