use std::fs;
use std::path::PathBuf;

use protobuf_example::pb::addressbook::person::PhoneType;
use protobuf_example::pb::enum_example::DayOfTheWeek;
use protobuf_example::pb::simple::SimpleMessage;
use protobuf_example::{demo, persistence, Codec, DemoBuilder, ProtoJsonCodec};

fn scratch_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("protobuf-example-it-{}-{}", std::process::id(), name))
}

#[test_log::test]
fn runs_the_whole_walk_through() {
  let path = scratch_path("walk-through.bin");
  let demo = DemoBuilder::new().output_path(&path).build().unwrap();
  let mut out = Vec::new();

  let report = demo.run(&mut out).unwrap();

  let printed = String::from_utf8(out).unwrap();
  let lines: Vec<&str> = printed.lines().collect();
  assert_eq!(
    lines,
    vec![
      r#"id:12345 is_simple:true name:"My Simple Message" sample_list:1 sample_list:4 sample_list:7 sample_list:8"#,
      r#"id:12345 is_simple:true name:"I renamed you" sample_list:1 sample_list:4 sample_list:7 sample_list:8"#,
      "The ID is: 12345",
      r#"id:12345 is_simple:true name:"I renamed you" sample_list:1 sample_list:4 sample_list:7 sample_list:8"#,
      r#"{"id":"12345","isSimple":true,"name":"I renamed you","sampleList":[1,4,7,8]}"#,
      r#"Successfully created proto struct: id:12345 is_simple:true name:"I renamed you" sample_list:1 sample_list:4 sample_list:7 sample_list:8"#,
      "id:42 day_of_the_week:MONDAY",
      r#"one_dummy:{id:1 name:"first message"} multiple_dummy:{id:2 name:"second message"} multiple_dummy:{id:3 name:"third message"}"#,
      r#"name:"Masataka Shintoku" id:1 email:"masataka.shintoku@gmail.com" phones:{number:"0120123456" type:MOBILE} phones:{number:"0120123456" type:HOME}"#,
    ]
  );

  assert_eq!(report.simple_from_file, report.simple);
  assert_eq!(report.simple_from_json, report.simple);
  assert_eq!(report.enum_message.day_of_the_week(), DayOfTheWeek::Monday);

  let on_disk: SimpleMessage = persistence::read_message(&ProtoJsonCodec::new(), &path).unwrap();
  assert_eq!(on_disk, report.simple);
  fs::remove_file(&path).unwrap();
}

#[test]
fn simple_message_survives_the_file() {
  let codec = ProtoJsonCodec::new();
  let path = scratch_path("scenario-1.bin");
  let original = SimpleMessage {
    id: 12345,
    is_simple: true,
    name: "My Simple Message".to_owned(),
    sample_list: vec![1, 4, 7, 8],
  };

  persistence::write_message(&codec, &path, &original).unwrap();
  let read: SimpleMessage = persistence::read_message(&codec, &path).unwrap();

  assert_eq!(read, original);
  assert_eq!(read.sample_list, vec![1, 4, 7, 8]);
  fs::remove_file(&path).unwrap();
}

#[test]
fn reassigned_day_replaces_the_old_one() {
  let mut em = demo::enum_message();
  assert_eq!(em.to_string(), "id:42 day_of_the_week:THURSDAY");

  em.set_day_of_the_week(DayOfTheWeek::Monday);

  let rendered = em.to_string();
  assert!(rendered.contains("MONDAY"));
  assert!(!rendered.contains("THURSDAY"));
}

#[test]
fn iterating_people_yields_the_single_person() {
  let book = demo::address_book();
  let people: Vec<_> = book.people.iter().collect();
  assert_eq!(people.len(), 1);

  let person = people[0];
  assert_eq!(person.name, "Masataka Shintoku");
  assert_eq!(person.id, 1);
  assert_eq!(person.email, "masataka.shintoku@gmail.com");
  let phones: Vec<_> = person.phones.iter().map(|p| (p.number.as_str(), p.r#type())).collect();
  assert_eq!(
    phones,
    vec![("0120123456", PhoneType::Mobile), ("0120123456", PhoneType::Home)]
  );
}

#[test]
fn reading_a_missing_file_fails_without_a_message() {
  let codec = ProtoJsonCodec::new();
  let path = scratch_path("never-written.bin");

  let result = persistence::read_message::<_, SimpleMessage>(&codec, &path);
  let err = result.unwrap_err();
  assert!(err.is_io());

  let mut target = demo::simple_message();
  let err = persistence::read_from_file(&path)
    .and_then(|bytes| codec.decode_binary_into(&bytes, &mut target).map_err(Into::into))
    .unwrap_err();
  assert!(err.is_io());
  assert_eq!(target, demo::simple_message());
}

#[test_log::test]
fn unwritable_output_aborts_the_run() {
  let path = scratch_path("missing-dir").join("simple.bin");
  let demo = DemoBuilder::new().output_path(&path).build().unwrap();
  let mut out = Vec::new();

  let err = demo.run(&mut out).unwrap_err();

  assert!(err.is_io());
  assert!(err.to_string().starts_with("Can't write to file"));
  // only the steps before persisting produced output
  assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
}
