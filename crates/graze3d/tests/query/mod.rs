mod point_triangle;
