mod response_normalizer_test;
mod workload_service_test;
