mod bmi_test;
mod health_test;
