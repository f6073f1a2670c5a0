use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{TokenRequest, TokenResponse},
        blogs::{BlogList, CreateBlogRequest},
        categories::{CategoryList, CreateCategoryRequest},
        orders::{CreateOrderRequest, OrderList},
        payments::{PaymentIntentResponse, RecordPaymentRequest},
        products::{CreateProductRequest, ProductList},
        users::{AdminProbe, BuyerProbe, NewUserRequest, SellerProbe, UserList, VerifiedProbe},
    },
    models::{Blog, Category, Order, Payment, Product, User},
    response::{ApiResponse, MutationSummary},
    routes::{auth, blogs, categories, health, orders, params, payments, products, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::issue_token,
        products::list_seller_products,
        products::create_product,
        products::list_by_category,
        products::list_reported,
        products::report_product,
        products::delete_product,
        products::clear_report,
        products::delete_reported,
        products::list_promoted,
        products::promote_product,
        categories::list_categories,
        categories::create_category,
        users::upsert_user,
        users::admin_probe,
        users::buyer_probe,
        users::seller_probe,
        users::verified_probe,
        users::list_by_role,
        users::verify_seller,
        users::delete_user,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        blogs::list_blogs,
        blogs::create_blog,
        payments::create_payment_intent,
        payments::record_payment
    ),
    components(
        schemas(
            User,
            Product,
            Category,
            Order,
            Payment,
            Blog,
            TokenRequest,
            TokenResponse,
            NewUserRequest,
            AdminProbe,
            BuyerProbe,
            SellerProbe,
            VerifiedProbe,
            UserList,
            CreateProductRequest,
            ProductList,
            CreateCategoryRequest,
            CategoryList,
            CreateOrderRequest,
            OrderList,
            CreateBlogRequest,
            BlogList,
            RecordPaymentRequest,
            PaymentIntentResponse,
            MutationSummary,
            params::TargetQuery,
            params::RoleQuery,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<OrderList>,
            ApiResponse<Payment>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Credential issuance"),
        (name = "Products", description = "Listings, reporting and promotion"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Users", description = "Identity store and role probes"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Blogs", description = "Blog endpoints"),
        (name = "Payments", description = "Checkout endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
