use magnet_uri_rs::{decode, DecodeError, DecoderOptions, MagnetLink};

const BAD_ESCAPE: &str = "q%w%erty";

const WIKIMEDIA: &str = "magnet:?xt=urn:ed2k:354B15E68FB8F36D7CD88FF94116CDC1\
&xt=urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY\
&xt=urn:btih:QHQXPYWMACKDWKP47RRVIV7VOURXFE5Q\
&xl=10826029\
&as=http%3A%2F%2Fdownload.wikimedia.org%2Fmediawiki%2F1.15%2Fmediawiki-1.15.1.tar.gz\
&dn=mediawiki-1.15.1.tar.gz\
&tr=udp%3A%2F%2Ftracker.openbittorrent.com%3A80%2Fannounce\
&xs=http%3A%2F%2Fcache.example.org%2FXRX2PEFXOOEJFRVUCX6HMZMKS5TWG4K5\
&xs=dchub%3A%2F%2Fexample.org\
&mt=http://weblog.foo/all-my-favorites.rss\
&kt=tag1+tag2\
&x.some=qwerty&x.some=qwerty2";

fn default_opts() -> DecoderOptions {
    DecoderOptions {
        strict: true,
        anchored: false,
    }
}

fn sorted(values: &[String]) -> Vec<&str> {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

#[test]
fn decode_full_link() {
    let link = decode(WIKIMEDIA, &default_opts()).unwrap();

    assert_eq!(link.display_name, "mediawiki-1.15.1.tar.gz");
    assert_eq!(
        sorted(&link.exact_topics),
        vec![
            "urn:btih:QHQXPYWMACKDWKP47RRVIV7VOURXFE5Q",
            "urn:ed2k:354B15E68FB8F36D7CD88FF94116CDC1",
            "urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY",
        ]
    );
    assert_eq!(link.exact_length, 10826029);
    assert_eq!(
        link.acceptable_sources,
        vec!["http://download.wikimedia.org/mediawiki/1.15/mediawiki-1.15.1.tar.gz"]
    );
    assert_eq!(
        link.exact_source,
        vec![
            "http://cache.example.org/XRX2PEFXOOEJFRVUCX6HMZMKS5TWG4K5",
            "dchub://example.org",
        ]
    );
    assert_eq!(link.keyword_topic, vec!["tag1", "tag2"]);
    assert_eq!(link.manifest_topic, "http://weblog.foo/all-my-favorites.rss");
    assert_eq!(
        link.trackers,
        vec!["udp://tracker.openbittorrent.com:80/announce"]
    );
    assert_eq!(link.addition_params.len(), 1);
    assert_eq!(link.addition_params["x.some"], vec!["qwerty", "qwerty2"]);
}

#[test]
fn decode_concrete_scenario() {
    let link = decode("magnet:?xt=urn:btih:ABC&dn=test.txt&xl=100", &default_opts()).unwrap();
    let expected = MagnetLink {
        display_name: "test.txt".to_string(),
        exact_topics: vec!["urn:btih:ABC".to_string()],
        exact_length: 100,
        ..MagnetLink::default()
    };
    assert_eq!(link, expected);
}

#[test]
fn decode_keyword_topics() {
    let link = decode("magnet:?kt=tag1+tag2&kt=tag3", &default_opts()).unwrap();
    assert_eq!(link.keyword_topic, vec!["tag1", "tag2", "tag3"]);
}

#[test]
fn decode_repeated_topic_is_deduplicated() {
    let uri = format!("magnet:?{}", vec!["xt=urn:btih:ABC"; 5].join("&"));
    let link = decode(&uri, &default_opts()).unwrap();
    assert_eq!(link.exact_topics, vec!["urn:btih:ABC"]);
}

#[test]
fn decode_exact_source_order_and_duplicates() {
    let link = decode("magnet:?xs=A&xs=B&xs=A", &default_opts()).unwrap();
    assert_eq!(link.exact_source, vec!["A", "B", "A"]);
}

#[test]
fn decode_tolerates_bad_params() {
    let link = decode("magnet:?xt=some&k=&g", &default_opts()).unwrap();
    assert!(link.addition_params.is_empty());
    assert_eq!(link.exact_topics, vec!["some"]);
}

#[test]
fn decode_bad_uri() {
    let err = decode("magnet", &default_opts()).unwrap_err();
    assert_eq!(err, DecodeError::UnsupportedFormat);
}

#[test]
fn decode_bad_query_escape() {
    for tag in ["dn", "tr", "as", "xs", "x.some"] {
        let uri = format!("magnet:?xt=urn:btih:ABC&{}={}", tag, BAD_ESCAPE);
        match decode(&uri, &default_opts()).unwrap_err() {
            DecodeError::InvalidEncoding { key, value } => {
                assert_eq!(key, tag);
                assert_eq!(value, BAD_ESCAPE);
            }
            other => panic!("expected InvalidEncoding for {}, got {:?}", tag, other),
        }
    }
}

#[test]
fn decode_bad_length() {
    for value in [BAD_ESCAPE, "notanumber", "1.5", ""] {
        let uri = format!("magnet:?xl={}x", value);
        match decode(&uri, &default_opts()).unwrap_err() {
            DecodeError::InvalidLength { value: got, .. } => {
                assert_eq!(got, format!("{}x", value))
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }
}

#[test]
fn decode_error_messages() {
    let err = decode("magnet:?dn=%zz", &default_opts()).unwrap_err();
    assert_eq!(err.to_string(), "invalid percent-encoding in `dn`: %zz");

    let err = decode("not a link", &default_opts()).unwrap_err();
    assert_eq!(err.to_string(), "uri does not contain the magnet:? prefix");

    let err = decode("magnet:?xl=ten", &default_opts()).unwrap_err();
    assert!(err.to_string().starts_with("invalid exact length `ten`"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn decode_error_discards_partial_result() {
    let result = decode("magnet:?dn=ok&xt=urn:btih:ABC&tr=%", &default_opts());
    assert!(result.is_err());
}

#[test]
fn decode_cyrillic_display_name() {
    let uri = "magnet:?xt=urn:btih:40BDD8101119EF795C9B31B456701C2513819FCE\
&tr=http%3A%2F%2Fbt4.t-ru.org%2Fann%3Fmagnet\
&dn=%D0%91%D1%8D%D1%82%D0%BC%D0%B5%D0%BD%20%2F%20The%20Batman%20(2022)%20%2B%203x%20M";
    let link = decode(uri, &default_opts()).unwrap();
    assert_eq!(link.display_name, "Бэтмен / The Batman (2022) + 3x M");
    assert_eq!(link.trackers, vec!["http://bt4.t-ru.org/ann?magnet"]);
}

#[test]
fn decode_lowercase_hex_escapes() {
    let uri = "magnet:?xt=urn:btih:a856772133117dd29d6e79695f4d087fa3dd3214\
&dn=Depeche%20Mode%20%e2%80%93%20Playing%20The%20Angel\
&tr=http%3a%2f%2fbt3.t-ru.org%2fann&tr=http%3a%2f%2fretracker.local%2fannounce";
    let link = decode(uri, &default_opts()).unwrap();
    assert_eq!(link.display_name, "Depeche Mode \u{2013} Playing The Angel");
    assert_eq!(
        sorted(&link.trackers),
        vec!["http://bt3.t-ru.org/ann", "http://retracker.local/announce"]
    );
}

#[test]
fn decode_plus_as_space_in_decoded_fields() {
    let link = decode("magnet:?dn=Big+Buck+Bunny&x.note=a+b", &default_opts()).unwrap();
    assert_eq!(link.display_name, "Big Buck Bunny");
    assert_eq!(link.addition_params["x.note"], vec!["a b"]);
}
