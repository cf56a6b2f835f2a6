#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .http
            .get($url)
            .github_headers(&$client.token)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .http
            .post($url)
            .github_headers(&$client.token)
            .json_content()
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}
