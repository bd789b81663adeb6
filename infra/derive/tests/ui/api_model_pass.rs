use shub_derive::api_model;

#[api_model]
pub struct TextRequest {
    pub input_text: String,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
pub struct Loose {
    pub some_field: u8,
}

fn main() {
    let parsed: TextRequest = serde_json::from_str(r#"{"inputText":"hi"}"#).unwrap();
    assert_eq!(parsed.input_text, "hi");
    assert!(serde_json::from_str::<TextRequest>(r#"{"inputText":"hi","x":1}"#).is_err());

    let loose: Loose = serde_json::from_str(r#"{"some_field":3,"extra":true}"#).unwrap();
    assert_eq!(loose.some_field, 3);
    println!("{loose:?}");
}
