use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &std::path::Path, api_url: &str) {
    let config = format!(
        r#"title: spacetraveling
language: pt-br
per_page: 2
cms:
  api_url: {}
  document_type: post
"#,
        api_url
    );
    std::fs::write(dir.join("_config.yml"), config).unwrap();
}

fn rich_text(text: &str) -> serde_json::Value {
    json!([{"type": "paragraph", "text": text, "spans": []}])
}

fn post_doc(uid: &str, date: &str, title: &str, subtitle: &str, author: &str) -> serde_json::Value {
    json!({
        "id": format!("id-{}", uid),
        "uid": uid,
        "type": "post",
        "first_publication_date": date,
        "data": {
            "title": rich_text(title),
            "subtitle": rich_text(subtitle),
            "author": rich_text(author),
            "banner": {"url": format!("https://images.example.com/{}.png", uid)},
            "content": [
                {
                    "heading": "Proin et varius",
                    "body": [
                        {"type": "paragraph", "text": "Nulla auctor sit amet quam vitae semper.", "spans": []}
                    ]
                }
            ]
        }
    })
}

fn mock_repository(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/v2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "refs": [
                    {"id": "master", "ref": "master-ref", "label": "Master", "isMasterRef": true},
                    {"id": "draft", "ref": "draft-ref", "label": "Draft"}
                ]
            }));
    });
}

fn mock_uid_lookup(server: &MockServer, doc: &serde_json::Value) {
    let uid = doc["uid"].as_str().unwrap();
    let body = json!({
        "page": 1,
        "total_pages": 1,
        "next_page": null,
        "results": [doc]
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/documents/search")
            .query_param("ref", "master-ref")
            .query_param("q", format!(r#"[[at(my.post.uid,"{}")]]"#, uid));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });
}

#[tokio::test]
async fn test_generate_full_site() {
    let server = MockServer::start();
    mock_repository(&server);

    let first = post_doc(
        "como-utilizar-hooks",
        "2021-03-15T19:25:28+0000",
        "Como utilizar Hooks",
        "Pensando em sincronização em vez de ciclos de vida",
        "Joseph Oliveira",
    );
    let second = post_doc(
        "criando-um-app-cra-do-zero",
        "2021-04-20T10:00:00+0000",
        "Criando um app CRA do zero",
        "Tudo sobre como criar a sua primeira aplicação",
        "Danilo Vieira",
    );
    let third = post_doc(
        "o-que-e-jamstack",
        "2021-05-02T08:30:00+0000",
        "O que é JAMStack",
        "Arquitetura moderna para sites",
        "Ana Souza",
    );

    // Listing page 1 points at page 2, which is the last one
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/documents/search")
            .query_param("ref", "master-ref")
            .query_param("q", r#"[[at(document.type,"post")]]"#)
            .query_param("pageSize", "2")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "page": 1,
                "total_pages": 2,
                "next_page": server.url("/api/v2/documents/search?page=2"),
                "results": [first.clone(), second.clone()]
            }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/documents/search")
            .query_param("ref", "master-ref")
            .query_param("q", r#"[[at(document.type,"post")]]"#)
            .query_param("pageSize", "2")
            .query_param("page", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "page": 2,
                "total_pages": 2,
                "next_page": null,
                "results": [third.clone()]
            }));
    });

    mock_uid_lookup(&server, &first);
    mock_uid_lookup(&server, &second);
    mock_uid_lookup(&server, &third);

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server.url("/api/v2"));

    // A local asset that should be copied into the public directory
    std::fs::create_dir_all(temp.path().join("static/css")).unwrap();
    std::fs::write(temp.path().join("static/css/style.css"), "body {}").unwrap();

    let app = nebula::Nebula::new(temp.path()).unwrap();
    app.generate().await.unwrap();

    // Listing page 1
    let index = std::fs::read_to_string(temp.path().join("public/index.html")).unwrap();
    assert!(index.contains("Como utilizar Hooks"));
    assert!(index.contains("Criando um app CRA do zero"));
    assert!(!index.contains("O que é JAMStack"));
    assert!(index.contains("15 de março de 2021"));
    assert!(index.contains("Joseph Oliveira"));
    assert!(index.contains(r#"href="/post/como-utilizar-hooks/""#));
    // The load-more affordance links to the next listing page
    assert!(index.contains(r#"href="/page/2/""#));
    assert!(index.contains("Carregar mais posts"));

    // Listing page 2 is the last one
    let page2 = std::fs::read_to_string(temp.path().join("public/page/2/index.html")).unwrap();
    assert!(page2.contains("O que é JAMStack"));
    assert!(page2.contains("Posts mais recentes"));
    assert!(!page2.contains("Carregar mais posts"));

    // Post page
    let post = std::fs::read_to_string(
        temp.path()
            .join("public/post/como-utilizar-hooks/index.html"),
    )
    .unwrap();
    assert!(post.contains("<h1>Como utilizar Hooks</h1>"));
    assert!(post.contains("15 mar 2021"));
    assert!(post.contains("Joseph Oliveira"));
    // 3 heading tokens + 7 body tokens, well under one minute of reading
    assert!(post.contains("1 min"));
    assert!(post.contains("<h2>Proin et varius</h2>"));
    assert!(post.contains("https://images.example.com/como-utilizar-hooks.png"));
    // Older neighbor in listing order
    assert!(post.contains("Criando um app CRA do zero"));

    // Copied asset
    assert!(temp.path().join("public/css/style.css").exists());
}

#[tokio::test]
async fn test_generate_fails_without_master_ref() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "refs": [{"id": "draft", "ref": "draft-ref", "label": "Draft"}]
            }));
    });

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server.url("/api/v2"));

    let app = nebula::Nebula::new(temp.path()).unwrap();
    let result = app.generate().await;

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("no master ref"));
}

#[tokio::test]
async fn test_generate_fails_on_service_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2");
        then.status(500);
    });

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server.url("/api/v2"));

    let app = nebula::Nebula::new(temp.path()).unwrap();
    assert!(app.generate().await.is_err());
}

#[tokio::test]
async fn test_clean_removes_public_dir() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "http://unused.example.com/api/v2");
    std::fs::create_dir_all(temp.path().join("public")).unwrap();
    std::fs::write(temp.path().join("public/index.html"), "<html></html>").unwrap();

    let app = nebula::Nebula::new(temp.path()).unwrap();
    app.clean().unwrap();

    assert!(!temp.path().join("public").exists());
}
