mod mobilenet_v2_test;
