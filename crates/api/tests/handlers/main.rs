mod test_utils;

mod middleware_test;
