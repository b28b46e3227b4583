mod union_fill;
