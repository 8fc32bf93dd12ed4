#[cfg(test)]
mod integration_tests {
    use axum::http::StatusCode;
    use axum_test::{TestResponse, TestServer};
    use serde_json::Value;

    use crate::test_utils::{
        login_as, setup_test_server, ADMIN_EMAIL, EDITOR_EMAIL, READONLY_EMAIL, TEST_PASSWORD,
    };

    fn location(response: &TestResponse) -> String {
        response
            .header("location")
            .to_str()
            .expect("missing location header")
            .to_string()
    }

    fn id_from_location(location: &str) -> i32 {
        location
            .rsplit('/')
            .next()
            .and_then(|id| id.parse().ok())
            .expect("redirect target should end in a record id")
    }

    /// Create a project through the API; caller must be signed in as an admin.
    async fn create_project(server: &TestServer, name: &str, prefix: &str) -> i32 {
        let response = server
            .post("/projects")
            .form(&[("name", name), ("part_number_prefix", prefix)])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        id_from_location(&location(&response))
    }

    /// Create a part through the API; caller must be signed in with edit
    /// permission. Returns the new part's id.
    async fn create_part(
        server: &TestServer,
        project_id: i32,
        part_type: &str,
        name: &str,
        parent_part_id: Option<i32>,
    ) -> TestResponse {
        let mut fields = vec![
            ("project_id".to_string(), project_id.to_string()),
            ("type".to_string(), part_type.to_string()),
            ("name".to_string(), name.to_string()),
        ];
        if let Some(parent) = parent_part_id {
            fields.push(("parent_part_id".to_string(), parent.to_string()));
        }
        server.post("/parts").form(&fields).await
    }

    async fn get_part_json(server: &TestServer, part_id: i32) -> Value {
        let response = server.get(&format!("/parts/{}", part_id)).await;
        response.assert_status(StatusCode::OK);
        response.json::<Value>()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = setup_test_server().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unauthenticated_requests_redirect_to_login() {
        let server = setup_test_server().await;

        for path in ["/", "/projects", "/users", "/change_password", "/logout"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(
                location(&response),
                format!("/login?redirect={}", path),
                "redirect should preserve the original path"
            );
        }
    }

    #[tokio::test]
    async fn test_login_failure_redirects_back() {
        let server = setup_test_server().await;

        let response = server
            .post("/login")
            .form(&[("email", ADMIN_EMAIL), ("password", "wrong")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login?failed=1");

        let page = server.get("/login?failed=1").await;
        page.assert_status(StatusCode::OK);
        let body: Value = page.json();
        assert_eq!(body["failed"], true);
    }

    #[tokio::test]
    async fn test_login_preserves_requested_path() {
        let server = setup_test_server().await;

        let response = server
            .post("/login")
            .form(&[
                ("email", ADMIN_EMAIL),
                ("password", TEST_PASSWORD),
                ("redirect", "/users"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/users");

        // The session is now live.
        let response = server.get("/projects").await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_redirects_to_projects() {
        let server = setup_test_server().await;
        login_as(&server, READONLY_EMAIL).await;

        let response = server.get("/").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/projects");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = setup_test_server().await;
        login_as(&server, EDITOR_EMAIL).await;

        let response = server.get("/logout").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let response = server.get("/projects").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login?redirect=/projects");
    }

    #[tokio::test]
    async fn test_create_project_requires_admin() {
        let server = setup_test_server().await;
        login_as(&server, EDITOR_EMAIL).await;

        let response = server
            .post("/projects")
            .form(&[("name", "Chassis"), ("part_number_prefix", "1000")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Insufficient permissions.");
    }

    #[tokio::test]
    async fn test_create_project_validation() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;

        let response = server
            .post("/projects")
            .form(&[("part_number_prefix", "1000")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing project name.");

        let response = server
            .post("/projects")
            .form(&[("name", "Chassis"), ("part_number_prefix", "12a4")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing or invalid part number prefix.");

        let response = server.post("/projects").form(&[("name", "Chassis")]).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing or invalid part number prefix.");
    }

    #[tokio::test]
    async fn test_create_and_get_project() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;

        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = server.get(&format!("/projects/{}", project_id)).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["project"]["name"], "Drivetrain");
        assert_eq!(body["project"]["part_number_prefix"], "1678");
        assert_eq!(body["parts"].as_array().unwrap().len(), 0);

        // Unknown projects halt with the standard message.
        let response = server.get("/projects/9999").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid project.");
    }

    #[tokio::test]
    async fn test_edit_project() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = server
            .post(&format!("/projects/{}/edit", project_id))
            .form(&[("part_number_prefix", "nope")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid part number prefix.");

        let response = server
            .post(&format!("/projects/{}/edit", project_id))
            .form(&[("name", "Drivetrain v2"), ("part_number_prefix", "1679")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/projects/{}", project_id));

        let response = server.get(&format!("/projects/{}", project_id)).await;
        let body: Value = response.json();
        assert_eq!(body["project"]["name"], "Drivetrain v2");
        assert_eq!(body["project"]["part_number_prefix"], "1679");
    }

    #[tokio::test]
    async fn test_delete_project() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Scrap", "9000").await;

        let response = server
            .post(&format!("/projects/{}/delete", project_id))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/projects");

        let response = server.get(&format!("/projects/{}", project_id)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_part_numbering() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        // Editors may create parts.
        login_as(&server, EDITOR_EMAIL).await;

        let response = create_part(&server, project_id, "assembly", "Gearbox", None).await;
        response.assert_status(StatusCode::SEE_OTHER);
        let gearbox_id = id_from_location(&location(&response));
        let gearbox = get_part_json(&server, gearbox_id).await;
        assert_eq!(gearbox["part"]["part_number"], "1678-0100");

        let response = create_part(&server, project_id, "assembly", "Intake", None).await;
        let intake_id = id_from_location(&location(&response));
        let intake = get_part_json(&server, intake_id).await;
        assert_eq!(intake["part"]["part_number"], "1678-0200");

        let response =
            create_part(&server, project_id, "part", "Output shaft", Some(gearbox_id)).await;
        let shaft_id = id_from_location(&location(&response));
        let shaft = get_part_json(&server, shaft_id).await;
        assert_eq!(shaft["part"]["part_number"], "1678-0101");
        assert_eq!(shaft["part"]["parent_part_id"], gearbox_id);

        let response =
            create_part(&server, project_id, "part", "Idler gear", Some(gearbox_id)).await;
        let idler_id = id_from_location(&location(&response));
        let idler = get_part_json(&server, idler_id).await;
        assert_eq!(idler["part"]["part_number"], "1678-0102");

        // The project page lists parts in number order.
        let response = server.get(&format!("/projects/{}", project_id)).await;
        let body: Value = response.json();
        let numbers: Vec<&str> = body["parts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["part_number"].as_str().unwrap())
            .collect();
        assert_eq!(
            numbers,
            vec!["1678-0100", "1678-0101", "1678-0102", "1678-0200"]
        );

        // The gearbox page lists its children.
        let gearbox = get_part_json(&server, gearbox_id).await;
        assert_eq!(gearbox["children"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_new_part_defaults() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = create_part(&server, project_id, "part", "Spacer", None).await;
        let part_id = id_from_location(&location(&response));
        let part = get_part_json(&server, part_id).await;

        assert_eq!(part["part"]["status"], "designing");
        assert_eq!(part["part"]["priority"], 1);
        assert_eq!(part["part"]["have_material"], false);
        assert_eq!(part["part"]["drawing_created"], false);
    }

    #[tokio::test]
    async fn test_create_part_validation() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = server.post("/parts").form(&[("type", "part")]).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing project ID.");

        let response = server
            .post("/parts")
            .form(&[("project_id", project_id.to_string().as_str()), ("name", "X")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing part type.");

        let response = server
            .post("/parts")
            .form(&[
                ("project_id", project_id.to_string().as_str()),
                ("type", "widget"),
                ("name", "X"),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid part type.");

        let response = server
            .post("/parts")
            .form(&[
                ("project_id", project_id.to_string().as_str()),
                ("type", "part"),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing part name.");

        let response = server
            .post("/parts")
            .form(&[("project_id", "9999"), ("type", "part"), ("name", "X")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid project.");

        // Read-only users cannot create parts at all.
        login_as(&server, READONLY_EMAIL).await;
        let response = create_part(&server, project_id, "part", "Spacer", None).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Insufficient permissions.");
    }

    #[tokio::test]
    async fn test_create_part_invalid_parent() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;
        let other_project_id = create_project(&server, "Intake", "1679").await;

        // Nonexistent parent.
        let response = create_part(&server, project_id, "part", "Shaft", Some(9999)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid parent part.");

        // Parent of the wrong variant.
        let response = create_part(&server, project_id, "part", "Plain part", None).await;
        let plain_id = id_from_location(&location(&response));
        let response = create_part(&server, project_id, "part", "Child", Some(plain_id)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid parent part.");

        // Parent from another project.
        let response = create_part(&server, other_project_id, "assembly", "Manifold", None).await;
        let foreign_assembly_id = id_from_location(&location(&response));
        let response =
            create_part(&server, project_id, "part", "Child", Some(foreign_assembly_id)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid parent part.");

        // Malformed parent id.
        let response = server
            .post("/parts")
            .form(&[
                ("project_id", project_id.to_string().as_str()),
                ("type", "part"),
                ("name", "Child"),
                ("parent_part_id", "12a"),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid parent part ID.");
    }

    #[tokio::test]
    async fn test_edit_part() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        login_as(&server, EDITOR_EMAIL).await;
        let response = create_part(&server, project_id, "part", "Shaft", None).await;
        let part_id = id_from_location(&location(&response));

        let response = server
            .post(&format!("/parts/{}/edit", part_id))
            .form(&[("status", "polishing")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid status.");

        let response = server
            .post(&format!("/parts/{}/edit", part_id))
            .form(&[("priority", "high")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid priority.");

        let response = server
            .post(&format!("/parts/{}/edit", part_id))
            .form(&[
                ("name", "Output shaft"),
                ("status", "manufacturing"),
                ("notes", "7075 round stock"),
                ("source_material", "1/2in hex"),
                ("have_material", "on"),
                ("cut_length", "6.5"),
                ("quantity", "2"),
                ("priority", "0"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/parts/{}", part_id));

        let part = get_part_json(&server, part_id).await;
        assert_eq!(part["part"]["name"], "Output shaft");
        assert_eq!(part["part"]["status"], "manufacturing");
        assert_eq!(part["part"]["notes"], "7075 round stock");
        assert_eq!(part["part"]["have_material"], true);
        // The drawing_created checkbox was not submitted, so it reads false.
        assert_eq!(part["part"]["drawing_created"], false);
        assert_eq!(part["part"]["priority"], 0);
        assert_eq!(part["part"]["quantity"], "2");
    }

    #[tokio::test]
    async fn test_delete_assembly_with_children() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = create_part(&server, project_id, "assembly", "Gearbox", None).await;
        let gearbox_id = id_from_location(&location(&response));
        let response = create_part(&server, project_id, "part", "Shaft", Some(gearbox_id)).await;
        let shaft_id = id_from_location(&location(&response));

        let response = server.post(&format!("/parts/{}/delete", gearbox_id)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Can't delete assembly with existing children."
        );

        // Deleting the child first unblocks the assembly.
        let response = server.post(&format!("/parts/{}/delete", shaft_id)).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/projects/{}", project_id));

        let response = server.post(&format!("/parts/{}/delete", gearbox_id)).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/projects/{}", project_id));

        let response = server.get(&format!("/parts/{}", gearbox_id)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid part.");
    }

    #[tokio::test]
    async fn test_new_part_page_validates_type() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = server
            .get(&format!("/projects/{}/new_part?type=widget", project_id))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid part type.");

        let response = server
            .get(&format!("/projects/{}/new_part", project_id))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["part_type"], "part");
    }

    #[tokio::test]
    async fn test_project_dashboard() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;
        let project_id = create_project(&server, "Drivetrain", "1678").await;

        let response = create_part(&server, project_id, "assembly", "Gearbox", None).await;
        let gearbox_id = id_from_location(&location(&response));
        create_part(&server, project_id, "part", "Shaft", Some(gearbox_id)).await;

        let response = server
            .get(&format!("/projects/{}/dashboard", project_id))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["part_count"], 2);

        let designing = body["status_counts"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["status"] == "designing")
            .unwrap();
        assert_eq!(designing["count"], 2);
        assert_eq!(designing["label"], "Design in progress");
    }

    #[tokio::test]
    async fn test_users_require_admin() {
        let server = setup_test_server().await;
        login_as(&server, EDITOR_EMAIL).await;

        let response = server.get("/users").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Insufficient permissions.");

        let response = server.get("/new_user").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_user_and_duplicate_email() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;

        let response = server
            .post("/users")
            .form(&[
                ("email", "pat@workshop.test"),
                ("first_name", "Pat"),
                ("last_name", "Fairbanks"),
                ("password", "shiny-new-mill"),
                ("permission", "editor"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/users");

        // The new user can sign in.
        let response = server
            .post("/login")
            .form(&[("email", "pat@workshop.test"), ("password", "shiny-new-mill")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        // Duplicate emails are rejected.
        login_as(&server, ADMIN_EMAIL).await;
        let response = server
            .post("/users")
            .form(&[
                ("email", "pat@workshop.test"),
                ("first_name", "Pat"),
                ("last_name", "Fairbanks"),
                ("password", "another"),
                ("permission", "editor"),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "User pat@workshop.test already exists.");
    }

    #[tokio::test]
    async fn test_create_user_validation() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;

        let response = server
            .post("/users")
            .form(&[("first_name", "Pat")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing email.");

        let response = server
            .post("/users")
            .form(&[("email", "pat@workshop.test")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing first name.");

        let response = server
            .post("/users")
            .form(&[
                ("email", "pat@workshop.test"),
                ("first_name", "Pat"),
                ("last_name", "Fairbanks"),
                ("password", "pw"),
                ("permission", "overlord"),
            ])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid permission.");
    }

    #[tokio::test]
    async fn test_edit_and_delete_user() {
        let server = setup_test_server().await;
        login_as(&server, ADMIN_EMAIL).await;

        let response = server
            .post("/users")
            .form(&[
                ("email", "pat@workshop.test"),
                ("first_name", "Pat"),
                ("last_name", "Fairbanks"),
                ("password", "shiny-new-mill"),
                ("permission", "readonly"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        let users: Value = server.get("/users").await.json();
        let pat = users
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["email"] == "pat@workshop.test")
            .unwrap()
            .clone();
        let pat_id = pat["id"].as_i64().unwrap();
        assert_eq!(pat["permission"], "readonly");

        // Promote and rename.
        let response = server
            .post(&format!("/users/{}/edit", pat_id))
            .form(&[("permission", "editor"), ("last_name", "Fairbank")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        let users: Value = server.get("/users").await.json();
        let pat = users
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["email"] == "pat@workshop.test")
            .unwrap()
            .clone();
        assert_eq!(pat["permission"], "editor");
        assert_eq!(pat["last_name"], "Fairbank");

        // Unknown permission on the edit path is rejected too.
        let response = server
            .post(&format!("/users/{}/edit", pat_id))
            .form(&[("permission", "overlord")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid permission.");

        // Delete removes the account.
        let response = server.post(&format!("/users/{}/delete", pat_id)).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/users");

        let users: Value = server.get("/users").await.json();
        assert!(users
            .as_array()
            .unwrap()
            .iter()
            .all(|u| u["email"] != "pat@workshop.test"));
    }

    #[tokio::test]
    async fn test_change_password() {
        let server = setup_test_server().await;
        login_as(&server, EDITOR_EMAIL).await;

        let response = server
            .post("/change_password")
            .form(&[("old_password", TEST_PASSWORD)])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Missing password.");

        let response = server
            .post("/change_password")
            .form(&[("old_password", "wrong"), ("password", "new-password")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Invalid old password.");

        let response = server
            .post("/change_password")
            .form(&[("old_password", TEST_PASSWORD), ("password", "new-password")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        // The old password no longer works; the new one does.
        let response = server
            .post("/login")
            .form(&[("email", EDITOR_EMAIL), ("password", TEST_PASSWORD)])
            .await;
        assert_eq!(location(&response), "/login?failed=1");

        let response = server
            .post("/login")
            .form(&[("email", EDITOR_EMAIL), ("password", "new-password")])
            .await;
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_login_page_redirects_signed_in_users() {
        let server = setup_test_server().await;
        login_as(&server, READONLY_EMAIL).await;

        let response = server.get("/login").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/logout");
    }
}
