//! Column names of the sales record schema.

pub const ORDER_ID: &str = "order_id";
pub const CUSTOMER_ID: &str = "customer_id";
pub const PRODUCT_ID: &str = "product_id";
pub const QUANTITY: &str = "quantity";
pub const PRICE_PER_ITEM: &str = "price_per_item";
pub const ORDER_DATE: &str = "order_date";

// Derived by the transformation.
pub const TOTAL_PRICE: &str = "total_price";
pub const TOTAL_SALES: &str = "total_sales";

/// The columns every sales input must carry, in canonical output order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    ORDER_ID,
    CUSTOMER_ID,
    PRODUCT_ID,
    QUANTITY,
    PRICE_PER_ITEM,
    ORDER_DATE,
];
