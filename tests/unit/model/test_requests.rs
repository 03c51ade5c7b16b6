use confluence_mcp::prelude::*;

#[test]
fn test_empty_params_produce_no_query() {
    assert_eq!(ListSpacesParams::default().to_query().to_query_string(), "");
    assert_eq!(GetSpaceParams::default().to_query().to_query_string(), "");
    assert_eq!(ListPagesParams::default().to_query().to_query_string(), "");
    assert_eq!(GetPageParams::default().to_query().to_query_string(), "");
}

#[test]
fn test_list_spaces_query() {
    let params = ListSpacesParams {
        ids: vec!["1".into(), "2".into()],
        space_type: Some(SpaceType::KnowledgeBase),
        status: Some(SpaceStatus::Current),
        sort: Some(SpaceSortOrder::NameDesc),
        include_icon: Some(false),
        limit: Some(25),
        ..ListSpacesParams::default()
    };
    let query = params.to_query();
    assert_eq!(query.get("ids"), Some("1,2"));
    assert_eq!(query.get("type"), Some("knowledge_base"));
    assert_eq!(query.get("status"), Some("current"));
    assert_eq!(query.get("sort"), Some("-name"));
    assert_eq!(query.get("include-icon"), Some("false"));
    assert_eq!(query.get("limit"), Some("25"));
    assert_eq!(query.get("keys"), None);
    assert_eq!(
        query.to_query_string(),
        "?ids=1%2C2&type=knowledge_base&status=current&sort=-name&include-icon=false&limit=25"
    );
}

#[test]
fn test_zero_limit_is_omitted() {
    let params = ListSpacesParams {
        limit: Some(0),
        ..ListSpacesParams::default()
    };
    assert!(params.to_query().is_empty());
}

#[test]
fn test_get_space_query() {
    let params = GetSpaceParams {
        description_format: Some(DescriptionFormat::Plain),
        include_labels: Some(true),
        include_role_assignments: Some(true),
        ..GetSpaceParams::default()
    };
    assert_eq!(
        params.to_query().to_query_string(),
        "?description-format=plain&include-role-assignments=true&include-labels=true"
    );
}

#[test]
fn test_list_pages_query() {
    let params = ListPagesParams {
        space_ids: vec!["98306".into(), "98307".into()],
        status: vec![ContentStatus::Current, ContentStatus::Archived],
        title: Some("Release notes".into()),
        body_format: Some(BodyFormat::AtlasDocFormat),
        cursor: Some("abc".into()),
        ..ListPagesParams::default()
    };
    let query = params.to_query();
    assert_eq!(query.get("space-id"), Some("98306,98307"));
    assert_eq!(query.get("status"), Some("current,archived"));
    assert_eq!(query.get("body-format"), Some("atlas_doc_format"));
    assert_eq!(
        query.to_query_string(),
        "?space-id=98306%2C98307&status=current%2Carchived&title=Release+notes&body-format=atlas_doc_format&cursor=abc"
    );
}

#[test]
fn test_get_page_query() {
    let params = GetPageParams {
        body_format: Some(BodyFormat::Storage),
        get_draft: Some(false),
        version: Some(3),
        include_favorited_by_current_user_status: Some(true),
        ..GetPageParams::default()
    };
    let query = params.to_query();
    assert_eq!(query.get("body-format"), Some("storage"));
    assert_eq!(query.get("get-draft"), Some("false"));
    assert_eq!(query.get("version"), Some("3"));
    assert_eq!(query.get("include-favorited-by-current-user-status"), Some("true"));
}

#[test]
fn test_query_params_skip_empty_values() {
    let mut query = QueryParams::new();
    query
        .push("title", Some(""))
        .push::<&str>("cursor", None)
        .push_list::<String>("id", &[]);
    assert!(query.is_empty());
    assert_eq!(query.to_query_string(), "");
}
