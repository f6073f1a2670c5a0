use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::payments::{PaymentIntentResponse, RecordPaymentRequest},
    entity::{
        orders::{Column as OrderCol, Entity as Orders},
        payments::{ActiveModel as PaymentActive, Model as PaymentModel},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::Payment,
    response::ApiResponse,
    state::AppState,
};

pub async fn create_intent(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    product_id: Uuid,
) -> AppResult<ApiResponse<PaymentIntentResponse>> {
    ensure_owner(user, uid)?;

    let product = Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    // Stripe expects the smallest currency unit; prices are stored in whole
    // dollars.
    let amount = product.resell_price * 100;
    let intent = state.stripe.create_payment_intent(amount, "usd").await?;

    Ok(ApiResponse::success(
        "Payment intent created",
        PaymentIntentResponse {
            client_secret: intent.client_secret,
        },
    ))
}

/// Record a completed checkout: insert the payment, mark the order paid,
/// and take the product off the market, as one transaction. An interior
/// miss aborts the whole sequence, so a payment row never outlives a
/// failed cascade.
pub async fn record_payment(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    payload: RecordPaymentRequest,
) -> AppResult<ApiResponse<Payment>> {
    ensure_owner(user, uid)?;

    let txn = state.orm.begin().await?;

    let payment = PaymentActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(payload.order_id),
        product_id: Set(payload.product_id),
        amount: Set(payload.amount),
        email: Set(payload.email),
        transaction_id: Set(payload.transaction_id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let order_result = Orders::update_many()
        .col_expr(OrderCol::OrderStatus, Expr::value(true))
        .filter(OrderCol::Id.eq(payload.order_id))
        .exec(&txn)
        .await?;
    if order_result.rows_affected == 0 {
        // Dropping the transaction rolls the payment insert back.
        return Err(AppError::NotFound);
    }

    let product_result = Products::update_many()
        .col_expr(ProdCol::OrderStatus, Expr::value(true))
        .col_expr(ProdCol::Promote, Expr::value(false))
        .filter(ProdCol::Id.eq(payload.product_id))
        .exec(&txn)
        .await?;
    if product_result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(&user.uid),
        "payment_recorded",
        Some("payments"),
        Some(json!({
            "payment_id": payment.id,
            "order_id": payment.order_id,
            "product_id": payment.product_id,
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Payment recorded",
        payment_from_entity(payment),
    ))
}

fn payment_from_entity(model: PaymentModel) -> Payment {
    Payment {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        amount: model.amount,
        email: model.email,
        transaction_id: model.transaction_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
