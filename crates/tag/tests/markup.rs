use std::rc::Rc;

use tag::{Attribute, EntityDecoder, Tag};

#[test]
fn opening_tag_with_no_attributes() {
    let mut tag = Tag::new("div");
    assert_eq!(tag.make_opening_tag(), "<div>");
    assert_eq!(tag.make_closing_tag(), "</div>");
}

#[test]
fn self_closing_tag_with_trailing_slash() {
    let mut tag = Tag::new("img");
    tag.self_closing().set_attribute("src", "a.png");
    assert_eq!(tag.make_opening_tag(), "<img src=\"a.png\" />");
    assert_eq!(tag.make_closing_tag(), "");
}

#[test]
fn self_closing_tag_without_trailing_slash() {
    let mut tag = Tag::new("img");
    tag.self_closing()
        .no_trailing_slash()
        .set_attribute("src", "a.png");
    assert_eq!(tag.make_opening_tag(), "<img src=\"a.png\">");
    assert_eq!(tag.make_closing_tag(), "");
}

#[test]
fn trailing_slash_setting_is_inert_without_self_closing() {
    let mut tag = Tag::new("p");
    tag.no_trailing_slash();
    assert_eq!(tag.make_opening_tag(), "<p>");
    assert_eq!(tag.make_closing_tag(), "</p>");
}

#[test]
fn attributes_render_in_insertion_order() {
    let mut tag = Tag::new("input");
    tag.set_attribute("type", "text");
    tag.set_attribute("name", "q");
    tag.set_attribute("id", "search");
    assert_eq!(
        tag.make_opening_tag(),
        "<input type=\"text\" name=\"q\" id=\"search\">"
    );
}

#[test]
fn bare_attribute_renders_without_equals_sign() {
    let mut tag = Tag::new("input");
    tag.set_attribute("type", "checkbox");
    tag.set_attribute("disabled", Attribute::bare());
    assert_eq!(
        tag.make_opening_tag(),
        "<input type=\"checkbox\" disabled>"
    );
}

#[test]
fn single_quoted_attribute_keeps_its_quote_style() {
    let mut tag = Tag::new("a");
    tag.set_attribute("href", Attribute::single_quoted("/index.html"));
    tag.set_attribute("title", "home");
    assert_eq!(
        tag.make_opening_tag(),
        "<a href='/index.html' title=\"home\">"
    );
}

#[test]
fn tag_name_case_is_preserved() {
    let mut tag = Tag::new("DIV");
    assert_eq!(tag.name(), "DIV");
    assert_eq!(tag.make_opening_tag(), "<DIV>");
    assert_eq!(tag.make_closing_tag(), "</DIV>");
}

#[test]
fn style_rewrites_render_back_into_the_opening_tag() {
    let mut tag = Tag::new("div");
    tag.set_attribute("class", "box");
    tag.set_style_attribute_value("color", "red");
    tag.set_style_attribute_value("width", "10px");
    assert_eq!(
        tag.make_opening_tag(),
        "<div class=\"box\" style=\"color:red;width:10px;\">"
    );
}

#[test]
fn encoded_values_are_decoded_in_markup() {
    let mut tag = Tag::new("a");
    tag.set_attribute("title", "Fish &amp; Chips");
    tag.set_encoding(Rc::new(EntityDecoder));
    assert_eq!(tag.make_opening_tag(), "<a title=\"Fish & Chips\">");
    // Rendering twice must not decode twice.
    assert_eq!(tag.make_opening_tag(), "<a title=\"Fish & Chips\">");
}
