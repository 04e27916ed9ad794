mod median_tests;
