//! Integration tests for the `/recipes` endpoints

#[macro_use]
mod common;

use actix_web::{http::header, test};

use common::{stored_user, TestContext};
use recipe_core::domain::entities::{CatalogKind, Role};
use recipe_core::repositories::CatalogRepository;

#[actix_web::test]
async fn test_catalog_listing_requires_token() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    for uri in ["/recipes/ingredients", "/recipes/category", "/recipes/cuisines"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "{}", uri);
    }
}

#[actix_web::test]
async fn test_catalog_listing_uses_list_keys() {
    let user = stored_user("ada@example.com", Role::User);
    let ctx = TestContext::with_users(vec![user.clone()]);
    ctx.catalog
        .insert_many(
            CatalogKind::FoodType,
            vec![recipe_core::CatalogItem::new("dessert")],
        )
        .await
        .unwrap();
    let app = init_app!(ctx);

    let cases = [
        ("/recipes/ingredients", "ingredients", serde_json::json!([])),
        ("/recipes/category", "category", serde_json::json!(["Dessert"])),
        ("/recipes/cuisines", "cuisines", serde_json::json!([])),
    ];

    for (uri, key, expected) in cases {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((header::AUTHORIZATION, ctx.bearer(&user)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body[key], expected);
    }
}

#[actix_web::test]
async fn test_admin_adds_ingredients() {
    let admin = stored_user("admin@example.com", Role::Admin);
    let ctx = TestContext::with_users(vec![admin.clone()]);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/recipes/add-ingredients")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&admin)))
        .set_json(["tomato", "BASIL"])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "2 Ingredients added successfully");

    let names = ctx
        .catalog
        .list_names(CatalogKind::Ingredient, 100)
        .await
        .unwrap();
    assert_eq!(names, vec!["Tomato".to_string(), "Basil".to_string()]);
}

#[actix_web::test]
async fn test_add_endpoints_report_their_list() {
    let admin = stored_user("admin@example.com", Role::Admin);
    let ctx = TestContext::with_users(vec![admin.clone()]);
    let app = init_app!(ctx);

    let cases = [
        ("/recipes/add-cuisines", "1 Cuisines added successfully"),
        ("/recipes/add-food_type", "1 food_type added successfully"),
    ];

    for (uri, message) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::AUTHORIZATION, ctx.bearer(&admin)))
            .set_json(["italian"])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_non_admin_is_forbidden() {
    let user = stored_user("ada@example.com", Role::User);
    let ctx = TestContext::with_users(vec![user.clone()]);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/recipes/add-ingredients")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&user)))
        .set_json(["tomato"])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let names = ctx
        .catalog
        .list_names(CatalogKind::Ingredient, 100)
        .await
        .unwrap();
    assert!(names.is_empty());
}

#[actix_web::test]
async fn test_admin_route_authentication_failures() {
    let admin = stored_user("admin@example.com", Role::Admin);
    let ctx = TestContext::with_users(vec![admin.clone()]);
    let app = init_app!(ctx);
    let valid = ctx.bearer(&admin);

    // Missing header, non-bearer scheme, garbage token
    for authorization in [None, Some("Basic abc".to_string()), Some("Bearer nope".to_string())] {
        let mut req = test::TestRequest::post()
            .uri("/recipes/add-ingredients")
            .set_json(["tomato"]);
        if let Some(value) = authorization {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), 401);
    }

    // Token outlives its account
    ctx.users.remove(admin.id).await;
    let req = test::TestRequest::post()
        .uri("/recipes/add-ingredients")
        .insert_header((header::AUTHORIZATION, valid))
        .set_json(["tomato"])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_empty_catalog_batch_is_rejected() {
    let admin = stored_user("admin@example.com", Role::Admin);
    let ctx = TestContext::with_users(vec![admin.clone()]);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/recipes/add-ingredients")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&admin)))
        .set_json(Vec::<String>::new())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_save_and_list_my_recipes() {
    let ada = stored_user("ada@example.com", Role::User);
    let bob = stored_user("bob@example.com", Role::User);
    let ctx = TestContext::with_users(vec![ada.clone(), bob.clone()]);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/recipes/my-recipes")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&ada)))
        .set_json(serde_json::json!({ "recipe_title": "Soup", "text": "Boil water." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let saved: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(saved["recipe_title"], "Soup");
    assert_eq!(saved["user_id"], ada.id.to_string());

    let req = test::TestRequest::get()
        .uri("/recipes/my-recipes")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&ada)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["id"], saved["id"]);

    let req = test::TestRequest::get()
        .uri("/recipes/my-recipes")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&bob)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["recipes"], serde_json::json!([]));
}

#[actix_web::test]
async fn test_save_recipe_validation() {
    let ada = stored_user("ada@example.com", Role::User);
    let ctx = TestContext::with_users(vec![ada.clone()]);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/recipes/my-recipes")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&ada)))
        .set_json(serde_json::json!({ "recipe_title": "", "text": "Boil water." }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/recipes/my-recipes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
