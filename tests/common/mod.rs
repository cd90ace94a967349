// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use weekly_test::{
    config::Config,
    models::question::Question,
    questions::{QuestionSource, StaticQuestionSource},
    routes,
    state::{AdminAccount, AppState},
    store::MemoryStore,
};

pub const ADMIN_USERNAME: &str = "examiner";
pub const ADMIN_PASSWORD: &str = "correct-horse";

pub struct TestApp {
    pub address: String,
    pub store: Arc<MemoryStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Signs up a valid candidate and returns the session id.
    pub async fn start_test(&self) -> String {
        let response = self
            .client
            .post(self.url("/api/signup"))
            .json(&signup_body())
            .send()
            .await
            .expect("Signup failed");
        assert_eq!(response.status().as_u16(), 201);

        let view: serde_json::Value = response.json().await.unwrap();
        view["sessionId"].as_str().unwrap().to_string()
    }

    pub async fn answer(&self, session: &str, question_id: i64, answer: &str) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/api/sessions/{}/answers", session)))
            .json(&serde_json::json!({ "questionId": question_id, "answer": answer }))
            .send()
            .await
            .expect("Answer request failed")
    }

    pub async fn admin_token(&self) -> String {
        let body: serde_json::Value = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD
            }))
            .send()
            .await
            .expect("Login failed")
            .json()
            .await
            .expect("Failed to parse login json");

        body["token"].as_str().expect("Token not found").to_string()
    }
}

pub fn signup_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Verma",
        "email": "asha@example.com",
        "phone": "9876543210",
        "fathersName": "Ravi Verma",
        "batchTime": "7:00 AM"
    })
}

pub fn question(id: i64, options: &[&str], answer: &str) -> Question {
    Question {
        id,
        question: format!("Question {}", id),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer: answer.to_string(),
        image: None,
    }
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        question(1, &["A", "B"], "A"),
        question(2, &["A", "B", "C"], "C"),
    ]
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        admin_username: Some(ADMIN_USERNAME.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        questions_path: "questions.json".to_string(),
        test_duration_secs: 300,
        session_retention_secs: 3600,
        bind_address: "127.0.0.1:0".to_string(),
        allowed_origins: vec!["http://localhost:3000".to_string()],
        static_dir: None,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(StaticQuestionSource::new(sample_questions()))).await
}

/// Spawns the app on a random port with an in-memory store.
pub async fn spawn_app_with(questions: Arc<dyn QuestionSource>) -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let admin = AdminAccount::new(ADMIN_USERNAME, ADMIN_PASSWORD).expect("Failed to hash admin password");

    let state = AppState::new(config, store.clone(), store.clone(), questions, Some(admin));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        store,
        client: reqwest::Client::new(),
    }
}
