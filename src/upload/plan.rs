use super::request::{SourceKind, UploadRequest};

pub const S3_DIR_PATH_URL: &str = "https://s3.console.aws.amazon.com/s3/buckets/";
pub const S3_OBJ_PATH_URL: &str = "https://s3.console.aws.amazon.com/s3/object/";

/// `aws s3` filters are applied in order and the last match wins, so an
/// include allow-list has to start by excluding everything.
pub const EXCLUDE_ALL_TYPES: [&str; 2] = ["--exclude", "*"];

/// The copy command and console link for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    /// Bucket-relative destination, e.g. `bucket/builds/dist`
    pub destination: String,
    pub browse_url: String,
    /// Arguments for the aws executable, starting at `s3 cp`
    pub args: Vec<String>,
}

impl UploadPlan {
    #[must_use]
    pub fn s3_uri(&self) -> String {
        format!("s3://{}", self.destination)
    }
}

/// Build the destination, console url and `aws s3 cp` arguments.
///
/// | kind      | target | destination                   | url prefix           |
/// |-----------|--------|-------------------------------|----------------------|
/// | directory | yes    | `bucket/target/name`          | `target/name/`       |
/// | directory | no     | `bucket/name`                 | `name/`              |
/// | file      | yes    | `bucket/target/name`          | `target/name`        |
/// | file      | no     | `bucket/`                     | `name`               |
#[must_use]
pub fn build_plan(request: &UploadRequest, kind: SourceKind) -> UploadPlan {
    let name = request.source_name();
    let bucket = &request.bucket;
    let region = &request.region;

    let prefix = match &request.target {
        Some(target) => format!("{target}/{name}"),
        None => name.clone(),
    };

    let (destination, browse_url) = match (kind, &request.target) {
        (SourceKind::Directory, _) => (
            format!("{bucket}/{prefix}"),
            bucket_listing_url(bucket, region, &prefix),
        ),
        (SourceKind::File, Some(_)) => (
            format!("{bucket}/{prefix}"),
            object_url(bucket, region, &prefix),
        ),
        (SourceKind::File, None) => (format!("{bucket}/"), object_url(bucket, region, &prefix)),
    };

    let mut args: Vec<String> = vec![
        "s3".to_string(),
        "cp".to_string(),
        request.source_arg(),
        format!("s3://{destination}"),
        "--region".to_string(),
        region.clone(),
    ];
    if kind == SourceKind::Directory {
        args.push("--recursive".to_string());
    }
    append_filters(&mut args, &request.include, &request.exclude);

    UploadPlan {
        destination,
        browse_url,
        args,
    }
}

/// Exclude pairs first, then (only with an allow-list) exclude-all and the include pairs
fn append_filters(args: &mut Vec<String>, include: &[String], exclude: &[String]) {
    for pattern in exclude {
        args.push("--exclude".to_string());
        args.push(pattern.clone());
    }
    if !include.is_empty() {
        args.extend(EXCLUDE_ALL_TYPES.iter().map(|s| (*s).to_string()));
        for pattern in include {
            args.push("--include".to_string());
            args.push(pattern.clone());
        }
    }
}

#[must_use]
pub fn bucket_listing_url(bucket: &str, region: &str, prefix: &str) -> String {
    format!("{S3_DIR_PATH_URL}{bucket}?region={region}&prefix={prefix}/&showversions=false")
}

#[must_use]
pub fn object_url(bucket: &str, region: &str, prefix: &str) -> String {
    format!("{S3_OBJ_PATH_URL}{bucket}?region={region}&prefix={prefix}")
}
