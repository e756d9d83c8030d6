use serde_json::{json, Value};

use crate::ipc::error::ok;
use crate::ipc::helpers::{
    annotated, bad_params, get_required_i64, get_required_u32, not_found, optional_filter,
    HandlerErr,
};
use crate::ipc::types::{AppState, Request};
use crate::model::CanteenCategory;

fn canteen_menu(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let category = match optional_filter(params, "category") {
        None => None,
        Some(raw) => Some(
            CanteenCategory::from_wire(&raw)
                .ok_or_else(|| bad_params("category must be main, snack, or beverage"))?,
        ),
    };

    let items: Vec<Value> = state
        .fixtures
        .canteen_menu
        .iter()
        .filter(|i| category.map(|c| i.effective_category() == c).unwrap_or(true))
        .map(|i| {
            annotated(
                i,
                vec![("inCart", json!(state.session.cart.quantity_of(i.id)))],
            )
        })
        .collect();

    Ok(json!({
        "today": state.fixtures.canteen_menu_date,
        "items": items,
    }))
}

fn cart_view(state: &AppState) -> Value {
    let fixtures = &state.fixtures;
    let lines: Vec<Value> = state
        .session
        .cart
        .lines()
        .iter()
        .map(|line| {
            let item = fixtures.canteen_item(line.item_id);
            json!({
                "itemId": line.item_id,
                "name": item.map(|i| i.name.as_str()),
                "price": item.map(|i| i.price),
                "quantity": line.quantity,
                "lineTotal": item.map(|i| u64::from(i.price) * u64::from(line.quantity)),
            })
        })
        .collect();
    let total = state
        .session
        .cart
        .total(|id| fixtures.canteen_item(id).map(|i| i.price));

    json!({ "lines": lines, "total": total })
}

fn cart_add(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let item_id = get_required_u32(params, "itemId")?;
    let item = state
        .fixtures
        .canteen_item(item_id)
        .ok_or_else(|| not_found("menu item not found"))?;
    if !item.available {
        return Err(HandlerErr::new("item_unavailable", "item is out of stock"));
    }
    state.session.cart.add(item_id);
    Ok(cart_view(state))
}

fn cart_update_quantity(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let item_id = get_required_u32(params, "itemId")?;
    let delta = get_required_i64(params, "delta")?;
    state.session.cart.update_quantity(item_id, delta);
    Ok(cart_view(state))
}

fn cart_remove(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let item_id = get_required_u32(params, "itemId")?;
    state.session.cart.remove(item_id);
    Ok(cart_view(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "canteen.menu" => Some(match canteen_menu(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "canteen.cartView" => Some(ok(&req.id, cart_view(state))),
        "canteen.cartAdd" => Some(match cart_add(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "canteen.cartUpdateQty" => Some(match cart_update_quantity(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        "canteen.cartRemove" => Some(match cart_remove(state, &req.params) {
            Ok(result) => ok(&req.id, result),
            Err(error) => error.response(&req.id),
        }),
        _ => None,
    }
}
