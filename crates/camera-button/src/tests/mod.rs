mod gesture;
